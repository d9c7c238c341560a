//! Selector Reducer

use crate::actions::SelectorAction;
use tb_flow::SelectorState;

pub fn reduce_selector(
    selector: Option<SelectorState>,
    action: &SelectorAction,
) -> Option<SelectorState> {
    match action {
        SelectorAction::Open { title, options } => {
            Some(SelectorState::open(title.clone(), options.clone()))
        }
        SelectorAction::Input(input) => selector.map(|mut s| {
            s.handle(*input);
            s
        }),
        SelectorAction::Released => None,
    }
}
