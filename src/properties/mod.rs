//! 테이블 기반 재료 물성: 탄성계수, 강도와 허용 응력 강도, 파단 응력/시간, 피로 곡선,
//! 열 물성, 크리프-피로 상호작용.

pub mod elastic;
pub mod fatigue;
pub mod intensities;
pub mod interaction;
pub mod rupture;
pub mod strength;
pub mod thermal;

pub use elastic::{poissons, youngs, YoungsModulus};
pub use fatigue::{cycles_to_failure, strain_to_failure, CycleBounds};
pub use intensities::{s_m, s_mt, s_o, s_t, time_s_t};
pub use interaction::{
    distance_envelope, inside_envelope, interaction_creep, interaction_fatigue, Envelope,
};
pub use rupture::{rupture_stress, rupture_time};
pub use strength::{
    tensile_strength_reduction_factor, ultimate_tensile_stress, yield_strength_reduction_factor,
    yield_stress, Aging,
};
pub use thermal::{cte, ctc, ctd};
