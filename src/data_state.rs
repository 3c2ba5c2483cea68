/// Load state of data a screen renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DataState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            DataState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DataState<U> {
        match self {
            DataState::Idle => DataState::Idle,
            DataState::Loading => DataState::Loading,
            DataState::Success(data) => DataState::Success(f(data)),
            DataState::Error(msg) => DataState::Error(msg),
        }
    }

    /// Run exactly one of the callbacks, picked by the current state.
    pub fn perform<I, L, S, E>(&self, on_idle: I, on_loading: L, on_success: S, on_error: E)
    where
        I: FnOnce(),
        L: FnOnce(),
        S: FnOnce(&T),
        E: FnOnce(&str),
    {
        match self {
            DataState::Idle => on_idle(),
            DataState::Loading => on_loading(),
            DataState::Success(data) => on_success(data),
            DataState::Error(msg) => on_error(msg),
        }
    }
}
