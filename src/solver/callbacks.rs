// ---------------------------------
// enum for managing callbacks
// ---------------------------------

pub(crate) type CallbackFcn<I> = Box<dyn FnMut(&I) -> bool + Send>;

pub(crate) enum Callback<I> {
    None,
    Rust(CallbackFcn<I>),
}

impl<I> std::fmt::Debug for Callback<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callback::None => write!(f, "Callback::None"),
            Callback::Rust(_) => write!(f, "Callback::Rust"),
        }
    }
}

impl<I> Default for Callback<I> {
    fn default() -> Self {
        Callback::None
    }
}

impl<I> Callback<I> {
    // Call the callback function
    fn call(&mut self, info: &I) -> bool {
        match self {
            Callback::None => false,
            Callback::Rust(f) => f(info),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SolverCallbacks<I> {
    /// callback for termination
    pub termination_callback: Callback<I>,
}

impl<I> Default for SolverCallbacks<I> {
    fn default() -> Self {
        Self {
            termination_callback: Callback::None,
        }
    }
}

impl<I> SolverCallbacks<I> {
    pub(crate) fn check_termination(&mut self, info: &I) -> bool {
        self.termination_callback.call(info)
    }
}
