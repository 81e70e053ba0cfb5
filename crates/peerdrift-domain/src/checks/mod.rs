use crate::model::WorkspaceModel;
use peerdrift_types::Finding;

mod peer_matches_root;

pub use peer_matches_root::find_problems;

pub fn run_all(model: &WorkspaceModel, out: &mut Vec<Finding>) {
    peer_matches_root::run(model, out);
}
