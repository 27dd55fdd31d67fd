//! Material-dependent coefficients of restitution.

use std::collections::HashMap;

use serde::Deserialize;

/// Fallback coefficient for materials missing from the table
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Named coefficients of restitution for ball materials
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MaterialTable {
    pub restitution: HashMap<String, f32>,
    pub default_restitution: f32,
}

impl Default for MaterialTable {
    fn default() -> Self {
        let mut restitution = HashMap::new();
        restitution.insert("elastic".to_string(), 1.0);
        restitution.insert("ivory".to_string(), 0.95);
        restitution.insert("resin".to_string(), 0.88);
        restitution.insert("clay".to_string(), 0.60);
        Self {
            restitution,
            default_restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl MaterialTable {
    /// Restitution for one material, falling back for unknown keys
    pub fn restitution_of(&self, material: &str) -> f32 {
        self.restitution
            .get(material)
            .copied()
            .unwrap_or(self.default_restitution)
    }

    /// Effective restitution for a contact pair: the lossier material wins
    pub fn pair_restitution(&self, a: &str, b: &str) -> f32 {
        self.restitution_of(a).min(self.restitution_of(b))
    }
}
