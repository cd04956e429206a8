//! 生產建議配置

use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 生產建議參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// 產品引用快照中不存在的原物料時的處理方式
    pub unknown_material_policy: UnknownMaterialPolicy,

    /// 是否在計算前驗證輸入
    /// - true: 需求數量為零或單位價值為負/非有限值時直接失敗（預設）
    /// - false: 略過驗證；數量為零的需求不構成限制
    pub validate_inputs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unknown_material_policy: UnknownMaterialPolicy::Reject,
            validate_inputs: true,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置未知原物料處理方式
    pub fn with_unknown_material_policy(mut self, policy: UnknownMaterialPolicy) -> Self {
        self.unknown_material_policy = policy;
        self
    }

    /// 建構器模式：設置是否驗證輸入
    pub fn with_validate_inputs(mut self, validate: bool) -> Self {
        self.validate_inputs = validate;
        self
    }

    /// 從 JSON 文件載入配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use planner_core::{PlannerConfig, UnknownMaterialPolicy};
    /// let config = PlannerConfig::from_json(r#"{"unknownMaterialPolicy": "treatAsUnavailable"}"#).unwrap();
    /// assert_eq!(config.unknown_material_policy, UnknownMaterialPolicy::TreatAsUnavailable);
    /// assert!(config.validate_inputs);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlannerError::Config(e.to_string()))
    }
}

/// 未知原物料處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownMaterialPolicy {
    /// 拒絕整次計算（UnknownMaterialReference）
    #[default]
    Reject,

    /// 視為零庫存，該產品無法生產
    TreatAsUnavailable,
}
