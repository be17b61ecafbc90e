use tracing::{debug, warn};

use crate::backend::GraphQuery;

pub mod markup;
pub mod outcome;
pub mod validate;

use self::markup::{FragmentBuilder, format_duration};
use self::outcome::{
    FURTHEST_INPUT_ERROR, FURTHEST_NOT_FOUND, FURTHEST_UNEXPECTED, FURTHEST_UNVERIFIED, Fragment,
    FragmentClass, PATH_INPUT_ERROR, PATH_UNEXPECTED, classify,
};
use self::validate::require_present;

pub const SHORTEST_PATH_PROMPT: &str = concat!(
    "<section class=\"shortest-path\">",
    "<h2>Find a Shortest Path</h2>",
    "<label for=\"start\">Start location:</label>",
    "<input id=\"start\" type=\"text\" name=\"start\" />",
    "<label for=\"end\">Destination:</label>",
    "<input id=\"end\" type=\"text\" name=\"end\" />",
    "<button id=\"find-shortest\" type=\"button\">Find Shortest Path</button>",
    "</section>",
);

pub const FURTHEST_DESTINATION_PROMPT: &str = concat!(
    "<section class=\"furthest-dest\">",
    "<h2>Find Furthest Destination</h2>",
    "<label for=\"from\">Start location:</label>",
    "<input id=\"from\" type=\"text\" name=\"from\" />",
    "<button id=\"furthest-btn\" type=\"button\">Furthest Destination From</button>",
    "</section>",
);

/// Renders the navigation forms and their results against a borrowed backend.
///
/// Every result call re-queries the backend and always yields a fragment;
/// backend failures are folded into the fragment's [`FragmentClass`].
#[derive(Debug)]
pub struct Presenter<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: GraphQuery + ?Sized> Presenter<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn render_shortest_path_prompt(&self) -> &'static str {
        SHORTEST_PATH_PROMPT
    }

    pub fn render_furthest_destination_prompt(&self) -> &'static str {
        FURTHEST_DESTINATION_PROMPT
    }

    pub fn render_shortest_path_result(&self, start: Option<&str>, end: Option<&str>) -> Fragment {
        let Some([start, end]) = require_present([start, end]) else {
            debug!("shortest-path request is missing a location");
            return Fragment::message(FragmentClass::InputError, PATH_INPUT_ERROR);
        };

        let path = match self.backend.shortest_path(start, end) {
            Ok(path) if !path.is_empty() => path,
            Ok(_) => {
                debug!(start, end, "backend returned an empty path");
                return no_path_found(start, end);
            }
            Err(error) => {
                if error.is_not_found() {
                    debug!(start, end, error = %error, "no path between locations");
                } else {
                    warn!(start, end, error = %error, "shortest-path lookup failed");
                }
                return classify(&error, PATH_UNEXPECTED, || no_path_found(start, end));
            }
        };

        let total = self.total_travel_time(start, end, path.len());
        debug!(start, end, stops = path.len(), total, "rendering shortest path");

        let html = FragmentBuilder::new()
            .markup("<section class=\"shortest-path-result\">")
            .markup("<p>Shortest path from ")
            .strong(start)
            .markup(" to ")
            .strong(end)
            .markup(":</p>")
            .ordered_list(&path)
            .markup("<p>Total travel time: ")
            .text(&format_duration(total))
            .markup("</p>")
            .markup("</section>")
            .finish();
        Fragment::new(FragmentClass::Ok, html)
    }

    pub fn render_furthest_destination_result(&self, start: Option<&str>) -> Fragment {
        let Some([start]) = require_present([start]) else {
            debug!("furthest-destination request is missing a location");
            return Fragment::message(FragmentClass::InputError, FURTHEST_INPUT_ERROR);
        };

        match self.backend.list_all_locations() {
            Ok(locations) if locations.iter().any(|location| location == start) => {}
            Ok(_) => {
                debug!(start, "start location is not on the map");
                return Fragment::message(FragmentClass::NotFound, FURTHEST_NOT_FOUND);
            }
            Err(error) => {
                warn!(start, error = %error, "failed to verify start location");
                return Fragment::message(FragmentClass::Unexpected, FURTHEST_UNVERIFIED);
            }
        }

        let destination = match self.backend.furthest_destination(start) {
            Ok(Some(destination)) if !destination.trim().is_empty() => destination,
            Ok(_) => {
                debug!(start, "no reachable destinations");
                return no_reachable_destinations(start);
            }
            Err(error) => {
                if error.is_not_found() {
                    debug!(start, error = %error, "furthest destination not found");
                } else {
                    warn!(start, error = %error, "furthest-destination lookup failed");
                }
                return classify(&error, FURTHEST_UNEXPECTED, || {
                    Fragment::message(FragmentClass::NotFound, FURTHEST_NOT_FOUND)
                });
            }
        };

        let path = match self.backend.shortest_path(start, &destination) {
            Ok(path) => path,
            Err(error) => {
                warn!(
                    start,
                    destination = %destination,
                    error = %error,
                    "path to furthest destination unavailable"
                );
                Vec::new()
            }
        };

        let builder = FragmentBuilder::new()
            .markup("<section class=\"furthest-dest-result\">")
            .markup("<p>Starting from ")
            .strong(start)
            .markup(", the furthest destination is ")
            .strong(&destination)
            .markup(".</p>");
        let builder = if path.is_empty() {
            builder.markup("<p>No path data available.</p>")
        } else {
            builder
                .markup("<p>One shortest path to this destination:</p>")
                .ordered_list(&path)
        };
        Fragment::new(FragmentClass::Ok, builder.markup("</section>").finish())
    }

    // Best effort: the path listing is still worth showing without times.
    fn total_travel_time(&self, start: &str, end: &str, stops: usize) -> f64 {
        let times = match self.backend.segment_times(start, end) {
            Ok(times) => times,
            Err(error) => {
                warn!(start, end, error = %error, "segment times unavailable; total is zero");
                return 0.0;
            }
        };

        if times.len() + 1 != stops {
            warn!(
                start,
                end,
                segments = times.len(),
                stops,
                "segment count does not match path length"
            );
        }

        // NaN marks a missing time and is skipped. Infinities are skipped as
        // well so the total always formats as a number of seconds.
        times.iter().copied().filter(|time| time.is_finite()).sum()
    }
}

fn no_path_found(start: &str, end: &str) -> Fragment {
    let html = FragmentBuilder::new()
        .markup("<p>No path found from \"")
        .text(start)
        .markup("\" to \"")
        .text(end)
        .markup("\".</p>")
        .finish();
    Fragment::new(FragmentClass::NotFound, html)
}

fn no_reachable_destinations(start: &str) -> Fragment {
    let html = FragmentBuilder::new()
        .markup("<p>No reachable destinations from \"")
        .text(start)
        .markup("\".</p>")
        .finish();
    Fragment::new(FragmentClass::NotFound, html)
}
