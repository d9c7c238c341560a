use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::Receiver;

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (dispatcher, action_rx) = Dispatcher::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
            action_rx,
        }
    }

    /// Add middleware to the store (runs in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Queue an action and process the queue until it is empty
    pub fn dispatch(&mut self, action: Action) {
        self.dispatcher.dispatch(action);
        self.process_pending();
    }

    /// Process every queued action, including those queued while processing
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}
