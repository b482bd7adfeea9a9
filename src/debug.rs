//! JSON dumps of paths for inspecting them outside of the simulation.

use serde_json::{json, Value};

use crate::ParametricPath;

/// Describes a path and `samples` points along it as JSON.
pub fn path_json(path: &dyn ParametricPath, samples: usize) -> Value {
    let points = path
        .sample_points(samples)
        .into_iter()
        .map(|p| json!([p.x, p.y]))
        .collect::<Vec<_>>();
    json!({
        "type": path.class_name(),
        "name": path.get_name(false),
        "localName": path.get_name(true),
        "startT": path.start_t_value(),
        "finishT": path.finish_t_value(),
        "closedLoop": path.is_closed_loop(),
        "points": points,
    })
}
