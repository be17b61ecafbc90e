use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::backend::{GraphQuery, QueryError, QueryResult};

pub const DEFAULT_FIXTURE_PATH: &str = "data/campus.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    locations: Vec<String>,
    #[serde(default)]
    routes: Vec<FixtureRoute>,
    #[serde(default)]
    furthest: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureRoute {
    from: String,
    to: String,
    stops: Vec<String>,
    #[serde(default)]
    segment_times: Vec<f64>,
}

/// Answers graph queries from a table of canned results.
///
/// Nothing is computed: a pair without a route entry has no path, and a
/// location without a `furthest` entry has no reachable destination.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureBackend {
    locations: Vec<String>,
    known: BTreeSet<String>,
    routes: BTreeMap<(String, String), FixtureRoute>,
    furthest: BTreeMap<String, String>,
}

impl FixtureBackend {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture file `{}`", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("failed to load fixture file `{}`", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let file =
            serde_yaml::from_str::<FixtureFile>(raw).context("failed to parse fixture YAML")?;
        Self::from_file(file)
    }

    fn from_file(file: FixtureFile) -> Result<Self> {
        ensure!(
            !file.locations.is_empty(),
            "fixture must declare at least one location"
        );

        let mut known = BTreeSet::new();
        for location in &file.locations {
            ensure!(
                !location.trim().is_empty(),
                "fixture location names cannot be blank"
            );
            ensure!(
                known.insert(location.clone()),
                "duplicate location `{location}`"
            );
        }

        let mut routes = BTreeMap::new();
        for route in file.routes {
            ensure!(
                known.contains(&route.from),
                "route references unknown location `{}`",
                route.from
            );
            ensure!(
                known.contains(&route.to),
                "route references unknown location `{}`",
                route.to
            );
            ensure!(
                route.stops.first() == Some(&route.from) && route.stops.last() == Some(&route.to),
                "route `{}` -> `{}` must start and end at its endpoints",
                route.from,
                route.to
            );
            let key = (route.from.clone(), route.to.clone());
            ensure!(
                !routes.contains_key(&key),
                "duplicate route `{}` -> `{}`",
                route.from,
                route.to
            );
            routes.insert(key, route);
        }

        for (from, to) in &file.furthest {
            ensure!(
                known.contains(from),
                "furthest entry references unknown location `{from}`"
            );
            ensure!(
                known.contains(to),
                "furthest entry for `{from}` references unknown location `{to}`"
            );
        }

        Ok(Self {
            locations: file.locations,
            known,
            routes,
            furthest: file.furthest,
        })
    }

    fn route(&self, from: &str, to: &str) -> QueryResult<&FixtureRoute> {
        for location in [from, to] {
            if !self.known.contains(location) {
                return Err(QueryError::not_found(format!(
                    "unknown location `{location}`"
                )));
            }
        }

        self.routes
            .get(&(from.to_owned(), to.to_owned()))
            .ok_or_else(|| QueryError::not_found(format!("no route from `{from}` to `{to}`")))
    }
}

impl GraphQuery for FixtureBackend {
    fn list_all_locations(&self) -> QueryResult<Vec<String>> {
        Ok(self.locations.clone())
    }

    fn shortest_path(&self, from: &str, to: &str) -> QueryResult<Vec<String>> {
        self.route(from, to).map(|route| route.stops.clone())
    }

    fn segment_times(&self, from: &str, to: &str) -> QueryResult<Vec<f64>> {
        self.route(from, to).map(|route| route.segment_times.clone())
    }

    fn furthest_destination(&self, from: &str) -> QueryResult<Option<String>> {
        if !self.known.contains(from) {
            return Err(QueryError::not_found(format!("unknown location `{from}`")));
        }
        Ok(self.furthest.get(from).cloned())
    }
}
