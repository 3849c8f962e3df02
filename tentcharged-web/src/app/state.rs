use std::rc::Rc;
use tentcharged_core::{SiteConfig, SiteEvent, SiteState, Storefront, Transition};
use yew::prelude::*;

/// Page state held by the root component. Every change goes through
/// [`SiteState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteStore {
    pub state: SiteState,
    pub last: Option<Transition>,
}

impl SiteStore {
    #[must_use]
    pub const fn new(state: SiteState) -> Self {
        Self { state, last: None }
    }
}

impl Reducible for SiteStore {
    type Action = SiteEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let label = action.label();
        let mut next = (*self).clone();
        let transition = next.state.apply(action);
        match &transition {
            Transition::Unchanged => {
                log::debug!("{label}: unchanged");
                return self;
            }
            Transition::Updated => log::debug!("{label}: updated"),
            Transition::ProductAdded(id) => log::info!("{label}: added product {id}"),
            Transition::Rejected(reason) => log::warn!("{label}: rejected ({reason})"),
        }
        next.last = Some(transition);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct AppState {
    pub store: UseReducerHandle<SiteStore>,
    initial: Rc<Storefront>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.initial.config
    }

    #[must_use]
    pub fn site(&self) -> &SiteState {
        &self.store.state
    }

    pub fn dispatch(&self, event: SiteEvent) {
        self.store.dispatch(event);
    }

    #[must_use]
    pub fn callback<T: 'static>(&self, event: impl Fn(T) -> SiteEvent + 'static) -> Callback<T> {
        let store = self.store.clone();
        Callback::from(move |value: T| store.dispatch(event(value)))
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let initial = use_memo((), |_| crate::data::load_storefront());
    let store = {
        let initial = Rc::clone(&initial);
        use_reducer(move || SiteStore::new(initial.state.clone()))
    };
    AppState { store, initial }
}
