use std::collections::BTreeMap;

use crate::domain::{
    catalog::entities::{ReferenceCatalog, ReferenceRange, TriggerRule},
    common::entities::app_errors::CoreError,
    evaluation::entities::Status,
};

pub const HEMOGLOBIN: &str = "ヘモグロビン";
pub const TOTAL_CHOLESTEROL: &str = "総コレステロール";
pub const HDL_CHOLESTEROL: &str = "HDLコレステロール";
pub const LDL_CHOLESTEROL: &str = "LDLコレステロール";
pub const TRIGLYCERIDES: &str = "中性脂肪";
pub const AST: &str = "AST";
pub const ALT: &str = "ALT";
pub const GAMMA_GTP: &str = "γ-GTP";

pub const IRON: &str = "鉄分";
pub const VITAMIN_A: &str = "ビタミンA";
pub const DIETARY_FIBER: &str = "食物繊維";

/// Items whose high readings trigger a dietary fiber recommendation.
pub const LIPID_ITEMS: [&str; 3] = [TOTAL_CHOLESTEROL, LDL_CHOLESTEROL, TRIGLYCERIDES];

fn foods(list: &[&str]) -> Vec<String> {
    list.iter().map(|food| food.to_string()).collect()
}

impl ReferenceCatalog {
    /// Sample adult reference ranges used by the health-check form.
    pub fn standard() -> Result<Self, CoreError> {
        let ranges = vec![
            ReferenceRange::new(HEMOGLOBIN, 13.1, 16.3, "g/dL"),
            ReferenceRange::new(TOTAL_CHOLESTEROL, 140.0, 199.0, "mg/dL"),
            ReferenceRange::new(HDL_CHOLESTEROL, 40.0, 999.0, "mg/dL"),
            ReferenceRange::new(LDL_CHOLESTEROL, 60.0, 119.0, "mg/dL"),
            ReferenceRange::new(TRIGLYCERIDES, 30.0, 149.0, "mg/dL"),
            ReferenceRange::new(AST, 13.0, 33.0, "U/L"),
            ReferenceRange::new(ALT, 8.0, 42.0, "U/L"),
            ReferenceRange::new(GAMMA_GTP, 16.0, 73.0, "U/L"),
        ];

        let foods = BTreeMap::from([
            (
                IRON.to_string(),
                foods(&["ほうれん草", "レバー", "ひじき", "あさり"]),
            ),
            (
                VITAMIN_A.to_string(),
                foods(&["にんじん", "かぼちゃ", "うなぎ"]),
            ),
            (
                DIETARY_FIBER.to_string(),
                foods(&["ごぼう", "きのこ類", "海藻類", "玄米"]),
            ),
        ]);

        let mut rules = vec![TriggerRule::new(HEMOGLOBIN, Status::Below, IRON)];
        rules.extend(
            LIPID_ITEMS
                .iter()
                .map(|item| TriggerRule::new(*item, Status::Above, DIETARY_FIBER)),
        );

        ReferenceCatalog::new(ranges, foods, rules)
    }
}
