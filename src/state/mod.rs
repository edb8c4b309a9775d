use crate::source::PostSource;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub source: Arc<dyn PostSource>,
}

impl State {
    pub fn new(source: Arc<dyn PostSource>) -> State {
        State { source }
    }
}
