use crate::catalog::Currency;
use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = Currency::ALL.len();
        match intent {
            PickerIntent::Open { role, current } => PickerState::Visible {
                role,
                highlighted: current.index(),
            },
            PickerIntent::Close => PickerState::Hidden,
            PickerIntent::MoveUp => match state {
                PickerState::Visible { role, highlighted } => {
                    let highlighted = if highlighted == 0 {
                        count.saturating_sub(1)
                    } else {
                        highlighted - 1
                    };
                    PickerState::Visible { role, highlighted }
                }
                other => other,
            },
            PickerIntent::MoveDown => match state {
                PickerState::Visible { role, highlighted } => {
                    let highlighted = if highlighted + 1 >= count {
                        0
                    } else {
                        highlighted + 1
                    };
                    PickerState::Visible { role, highlighted }
                }
                other => other,
            },
        }
    }
}
