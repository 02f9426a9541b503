//! Router-backed navigation collaborator

use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

use nucleyes::dashboard::Navigator;

#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Must be called inside a `<Router>`
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        (self.navigate)(path)
    }
}
