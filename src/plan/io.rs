//! I/O operations for deletion plans.

use crate::plan::data::{DeletionPlan, PLAN_VERSION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Envelope for plan files to include integrity checks.
#[derive(Debug, Serialize, Deserialize)]
struct PlanEnvelope {
    /// SHA256 checksum of the serialized plan data.
    checksum: String,
    /// The actual plan data.
    plan: DeletionPlan,
}

fn checksum_of(plan: &DeletionPlan) -> Result<String> {
    let plan_json =
        serde_json::to_string(plan).context("Failed to serialize plan for checksum calculation")?;
    let mut hasher = Sha256::new();
    hasher.update(plan_json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl DeletionPlan {
    /// Saves the plan to a file with an integrity checksum.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create plan file: {}", path.display()))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write plan to: {}", path.display()))?;
        log::info!("Saved deletion plan with {} file(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Serializes the plan to a JSON string with an integrity checksum.
    pub fn to_json(&self) -> Result<String> {
        let envelope = PlanEnvelope {
            checksum: checksum_of(self)?,
            plan: self.clone(),
        };

        serde_json::to_string_pretty(&envelope).context("Failed to serialize plan envelope")
    }

    /// Loads a plan from a file and verifies its integrity.
    ///
    /// Listed files that no longer exist are logged; they stay in the plan
    /// and will be reported as failures when deleted.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

        let envelope: PlanEnvelope = serde_json::from_str(&content)
            .context("Failed to parse plan envelope. The file might be corrupted.")?;

        // Compact serialization, same as to_json
        if checksum_of(&envelope.plan)? != envelope.checksum {
            anyhow::bail!("Plan integrity check failed: checksum mismatch. The file may have been edited or corrupted.");
        }

        let plan = envelope.plan;

        if plan.version != PLAN_VERSION {
            anyhow::bail!(
                "Unsupported plan version: {}. Current version is {}.",
                plan.version,
                PLAN_VERSION
            );
        }

        for file in &plan.files {
            if !file.exists() {
                log::warn!(
                    "File listed in plan no longer exists: {}",
                    file.display()
                );
            }
        }

        Ok(plan)
    }
}
