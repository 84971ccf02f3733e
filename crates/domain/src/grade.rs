// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grade and stage vocabularies per race type.

use crate::error::DomainError;
use crate::race_type::RaceType;

const JRA_GRADES: &[&str] = &[
    "GⅠ",
    "GⅡ",
    "GⅢ",
    "J.GⅠ",
    "J.GⅡ",
    "J.GⅢ",
    "JpnⅠ",
    "JpnⅡ",
    "JpnⅢ",
    "Listed",
    "オープン特別",
    "オープン",
    "3勝クラス",
    "2勝クラス",
    "1勝クラス",
    "1600万下",
    "1000万下",
    "900万下",
    "500万下",
    "未勝利",
    "未出走",
    "新馬",
    "格付けなし",
];

const NAR_GRADES: &[&str] = &[
    "GⅠ",
    "GⅡ",
    "GⅢ",
    "JpnⅠ",
    "JpnⅡ",
    "JpnⅢ",
    "重賞",
    "地方重賞",
    "Listed",
    "オープン特別",
    "地方準重賞",
    "格付けなし",
    "一般",
];

const OVERSEAS_GRADES: &[&str] = &["GⅠ", "GⅡ", "GⅢ", "Listed", "格付けなし"];

const KEIRIN_GRADES: &[&str] = &["GP", "GⅠ", "GⅡ", "GⅢ", "FⅠ", "FⅡ"];

const AUTORACE_GRADES: &[&str] = &["SG", "特GⅠ", "GⅠ", "GⅡ", "開催"];

const BOATRACE_GRADES: &[&str] = &["SG", "GⅠ", "GⅡ", "GⅢ", "一般"];

const KEIRIN_STAGES: &[&str] = &[
    "S級グランプリ",
    "S級決勝",
    "S級準決勝",
    "S級特別優秀",
    "S級優秀",
    "S級特選",
    "S級選抜",
    "S級二次予選",
    "S級初日特選",
    "S級予選",
    "S級一般",
    "A級決勝",
    "A級準決勝",
    "A級特選",
    "A級選抜",
    "A級予選",
    "A級一般",
    "A級チャレンジ決勝",
    "A級チャレンジ準決勝",
    "A級チャレンジ予選",
    "L級ガールズ決勝",
    "L級ガールズ準決勝",
    "L級ガールズ予選",
];

const AUTORACE_STAGES: &[&str] = &[
    "優勝戦",
    "準決勝戦",
    "特別選抜戦",
    "選抜予選",
    "最終予選",
    "予選",
    "一般戦",
];

const BOATRACE_STAGES: &[&str] = &[
    "優勝戦",
    "準優勝戦",
    "ドリーム戦",
    "特別選抜",
    "選抜戦",
    "予選特選",
    "予選",
    "一般",
];

/// Returns the grade vocabulary of a race type.
#[must_use]
pub const fn grade_list(race_type: RaceType) -> &'static [&'static str] {
    match race_type {
        RaceType::Jra => JRA_GRADES,
        RaceType::Nar => NAR_GRADES,
        RaceType::Overseas => OVERSEAS_GRADES,
        RaceType::Keirin => KEIRIN_GRADES,
        RaceType::Autorace => AUTORACE_GRADES,
        RaceType::Boatrace => BOATRACE_GRADES,
    }
}

/// Returns the stage vocabulary of a race type. Empty for horse racing.
#[must_use]
pub const fn stage_list(race_type: RaceType) -> &'static [&'static str] {
    match race_type {
        RaceType::Keirin => KEIRIN_STAGES,
        RaceType::Autorace => AUTORACE_STAGES,
        RaceType::Boatrace => BOATRACE_STAGES,
        RaceType::Jra | RaceType::Nar | RaceType::Overseas => &[],
    }
}

/// Prestige tier of a grade, used to colour calendar events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeTier {
    /// GⅠ, GP, SG and their equivalents.
    Top,
    /// GⅡ and equivalents.
    Second,
    /// GⅢ and regional graded races.
    Third,
    /// Listed and open special races.
    Listed,
    /// Everything else.
    Other,
}

/// A grade validated against its race type's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradeType {
    race_type: RaceType,
    value: String,
}

impl GradeType {
    /// Creates a validated grade.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGrade` if the value is not in the race
    /// type's grade vocabulary.
    pub fn new(race_type: RaceType, value: &str) -> Result<Self, DomainError> {
        if !grade_list(race_type).contains(&value) {
            return Err(DomainError::InvalidGrade {
                race_type,
                value: value.to_string(),
            });
        }
        Ok(Self {
            race_type,
            value: value.to_string(),
        })
    }

    #[must_use]
    pub const fn race_type(&self) -> RaceType {
        self.race_type
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the prestige tier of this grade.
    #[must_use]
    pub fn tier(&self) -> GradeTier {
        match (self.race_type, self.value.as_str()) {
            (RaceType::Keirin, "GP" | "GⅠ") | (RaceType::Autorace | RaceType::Boatrace, "SG") => {
                GradeTier::Top
            }
            (RaceType::Autorace, "特GⅠ" | "GⅠ") | (RaceType::Boatrace, "GⅠ") => GradeTier::Second,
            (RaceType::Autorace | RaceType::Boatrace, "GⅡ")
            | (RaceType::Nar, "重賞" | "地方重賞") => GradeTier::Third,
            (RaceType::Boatrace, "GⅢ") | (RaceType::Keirin, "FⅠ") => GradeTier::Listed,
            (_, "GⅠ" | "J.GⅠ" | "JpnⅠ") => GradeTier::Top,
            (_, "GⅡ" | "J.GⅡ" | "JpnⅡ") => GradeTier::Second,
            (_, "GⅢ" | "J.GⅢ" | "JpnⅢ") => GradeTier::Third,
            (_, "Listed" | "オープン特別" | "地方準重賞") => GradeTier::Listed,
            _ => GradeTier::Other,
        }
    }
}

impl std::fmt::Display for GradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A race round label such as "優勝戦", validated against its race type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaceStage {
    race_type: RaceType,
    value: String,
}

impl RaceStage {
    /// Creates a validated stage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStage` if the value is not in the race
    /// type's stage vocabulary (horse racing has none).
    pub fn new(race_type: RaceType, value: &str) -> Result<Self, DomainError> {
        if !stage_list(race_type).contains(&value) {
            return Err(DomainError::InvalidStage {
                race_type,
                value: value.to_string(),
            });
        }
        Ok(Self {
            race_type,
            value: value.to_string(),
        })
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RaceStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
