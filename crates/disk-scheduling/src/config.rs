//! Scenario configuration.
//!
//! A scenario is described in YAML, for example:
//!
//! ```yaml
//! requests: "98,183,37,122,14,124,65,67"
//! initial_head: 53
//! disk_size: 200
//! direction: right
//! algorithms: [FCFS, SSTF]
//! ```
//!
//! Instead of explicit `requests` a `random` block with `count` and `seed` can be used.
//! Omitted fields take the values of the textbook example.

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::direction::Direction;
use crate::generator::generate_requests;
use crate::input::{parse_requests, InputError, Workload};

/// Parameters of randomly generated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomRequests {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
}

fn default_requests() -> String {
    "98,183,37,122,14,124,65,67".to_string()
}

fn default_initial_head() -> i64 {
    53
}

fn default_disk_size() -> i64 {
    200
}

/// YAML-serializable scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Comma-separated track numbers.
    #[serde(default = "default_requests")]
    pub requests: String,
    /// If set, requests are generated and `requests` is ignored.
    #[serde(default)]
    pub random: Option<RandomRequests>,
    #[serde(default = "default_initial_head")]
    pub initial_head: i64,
    #[serde(default = "default_disk_size")]
    pub disk_size: i64,
    #[serde(default)]
    pub direction: Direction,
    /// Algorithm names, all algorithms are used if empty.
    #[serde(default)]
    pub algorithms: Vec<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
            random: None,
            initial_head: default_initial_head(),
            disk_size: default_disk_size(),
            direction: Direction::default(),
            algorithms: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// Reads scenario from YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| format!("can't open scenario file {:?}: {}", path, e))?;
        let config: Self =
            serde_yaml::from_reader(file).map_err(|e| format!("can't parse scenario file {:?}: {}", path, e))?;
        debug!("Loaded scenario from {:?}", path);
        Ok(config)
    }

    /// Parses scenario from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("can't parse scenario: {}", e))
    }

    /// Builds validated workload from the scenario.
    pub fn workload(&self) -> Result<Workload, InputError> {
        let requests = match &self.random {
            Some(random) => {
                if self.disk_size <= 0 {
                    return Err(InputError::InvalidDiskSize(self.disk_size));
                }
                generate_requests(random.count, self.disk_size as u64, random.seed)
                    .into_iter()
                    .map(|track| track as i64)
                    .collect()
            }
            None => parse_requests(&self.requests)?,
        };
        Workload::new(requests, self.initial_head, self.disk_size, self.direction)
    }

    /// Returns algorithms listed in the scenario, or all algorithms if none are listed.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, InputError> {
        if self.algorithms.is_empty() {
            return Ok(Algorithm::all());
        }
        self.algorithms.iter().map(|name| name.parse()).collect()
    }
}
