use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::{GraphQuery, QueryError, QueryResult};

pub const CAMPUS_FIXTURE_YAML: &str = include_str!("../data/campus.yaml");

pub fn temp_path(prefix: &str) -> PathBuf {
    let now_ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "campus_nav_{prefix}_{}_{}",
        std::process::id(),
        now_ns
    ))
}

pub fn remove_dir_if_exists(path: &Path) {
    let _ = std::fs::remove_dir_all(path);
}

pub fn apply_fixture_test_env(command: &mut Command, fixture_path: &Path) {
    command.env("CAMPUS_NAV_FIXTURE", fixture_path.as_os_str());
    command.env_remove("CAMPUS_NAV_OUTPUT");
    command.env("RUST_LOG", "error");
}

/// Backend double with one scripted answer per query. Unscripted queries fail
/// with [`QueryError::Failure`]. Every call is recorded in order.
#[derive(Debug)]
pub struct ScriptedBackend {
    locations: QueryResult<Vec<String>>,
    path: QueryResult<Vec<String>>,
    times: QueryResult<Vec<f64>>,
    furthest: QueryResult<Option<String>>,
    calls: RefCell<Vec<String>>,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            locations: Err(unscripted("list_all_locations")),
            path: Err(unscripted("shortest_path")),
            times: Err(unscripted("segment_times")),
            furthest: Err(unscripted("furthest_destination")),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_locations(mut self, locations: &[&str]) -> Self {
        self.locations = Ok(owned(locations));
        self
    }

    pub fn with_locations_error(mut self, error: QueryError) -> Self {
        self.locations = Err(error);
        self
    }

    pub fn with_path(mut self, stops: &[&str]) -> Self {
        self.path = Ok(owned(stops));
        self
    }

    pub fn with_path_error(mut self, error: QueryError) -> Self {
        self.path = Err(error);
        self
    }

    pub fn with_segment_times(mut self, times: &[f64]) -> Self {
        self.times = Ok(times.to_vec());
        self
    }

    pub fn with_segment_times_error(mut self, error: QueryError) -> Self {
        self.times = Err(error);
        self
    }

    pub fn with_furthest(mut self, destination: Option<&str>) -> Self {
        self.furthest = Ok(destination.map(str::to_owned));
        self
    }

    pub fn with_furthest_error(mut self, error: QueryError) -> Self {
        self.furthest = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphQuery for ScriptedBackend {
    fn list_all_locations(&self) -> QueryResult<Vec<String>> {
        self.record("list_all_locations()".to_owned());
        self.locations.clone()
    }

    fn shortest_path(&self, from: &str, to: &str) -> QueryResult<Vec<String>> {
        self.record(format!("shortest_path({from}, {to})"));
        self.path.clone()
    }

    fn segment_times(&self, from: &str, to: &str) -> QueryResult<Vec<f64>> {
        self.record(format!("segment_times({from}, {to})"));
        self.times.clone()
    }

    fn furthest_destination(&self, from: &str) -> QueryResult<Option<String>> {
        self.record(format!("furthest_destination({from})"));
        self.furthest.clone()
    }
}

fn unscripted(query: &str) -> QueryError {
    QueryError::failure(format!("`{query}` was not scripted"))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
