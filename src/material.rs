/// 고온 설계 대상 재료 목록과 재료별 상수를 제공한다.
/// 값은 참고용이며 설계 시 최신 코드(ASME Sec III Div 5 등)로 검증해야 한다.
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// 지원하는 일곱 가지 재료.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialId {
    /// 304 스테인리스강 (304H)
    Ss304,
    /// 316 스테인리스강 (316H)
    Ss316,
    /// 2.25Cr-1Mo 저합금강
    Cr2Mo,
    /// Grade 91 (9Cr-1Mo-V)
    Gr91,
    /// Alloy 800H
    Alloy800H,
    /// Alloy 617
    A617,
    /// Alloy 740H
    A740H,
}

#[derive(Debug)]
struct MaterialData {
    id: MaterialId,
    code: &'static str,
    name: &'static str,
    poissons: f64,
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        id: MaterialId::Ss304,
        code: "304",
        name: "Type 304H stainless steel",
        poissons: 0.31,
    },
    MaterialData {
        id: MaterialId::Ss316,
        code: "316",
        name: "Type 316H stainless steel",
        poissons: 0.31,
    },
    MaterialData {
        id: MaterialId::Cr2Mo,
        code: "2.25Cr-1Mo",
        name: "2.25Cr-1Mo steel",
        poissons: 0.30,
    },
    MaterialData {
        id: MaterialId::Gr91,
        code: "gr91",
        name: "9Cr-1Mo-V (Grade 91)",
        poissons: 0.30,
    },
    MaterialData {
        id: MaterialId::Alloy800H,
        code: "800H",
        name: "Alloy 800H",
        poissons: 0.31,
    },
    MaterialData {
        id: MaterialId::A617,
        code: "A617",
        name: "Alloy 617",
        poissons: 0.31,
    },
    MaterialData {
        id: MaterialId::A740H,
        code: "A740H",
        name: "Alloy 740H",
        poissons: 0.31,
    },
];

impl MaterialId {
    /// 지원 재료 전체.
    pub fn all() -> impl Iterator<Item = MaterialId> {
        MATERIALS.iter().map(|m| m.id)
    }

    /// 재료 코드 문자열을 해석한다. 대소문자는 구분하지 않는다.
    pub fn from_code(code: &str) -> Result<Self, DataError> {
        MATERIALS
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(code.trim()))
            .map(|m| m.id)
            .ok_or_else(|| DataError::UnknownMaterial(code.to_string()))
    }

    /// 데이터 디렉터리에서 쓰이는 재료 코드.
    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// 온도 무관 포아송비.
    pub fn poissons(self) -> f64 {
        self.data().poissons
    }

    fn data(self) -> &'static MaterialData {
        // MATERIALS 순서는 열거형 선언 순서와 같다.
        &MATERIALS[self as usize]
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for MaterialId {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialId::from_code(s)
    }
}
