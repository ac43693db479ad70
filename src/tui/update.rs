//! Pure state transitions for the form model.

use super::model::{Field, FormAction, FormCmd, FormModel, FormMsg, SubmissionPhase};
use crate::predict::{PredictionRequest, RenderedResult};

/// Apply one message to the model and return the side-effect to run.
pub fn update(model: &mut FormModel, msg: FormMsg) -> FormCmd {
    match msg {
        FormMsg::Resize { cols, rows } => {
            model.terminal_size = (cols, rows);
            FormCmd::None
        }
        FormMsg::Completed(result) => {
            model.phase = SubmissionPhase::Idle;
            model.result = Some(*result);
            FormCmd::None
        }
        FormMsg::Action(_) if model.phase == SubmissionPhase::Requesting => FormCmd::None,
        FormMsg::Action(action) => apply_action(model, action),
    }
}

fn apply_action(model: &mut FormModel, action: FormAction) -> FormCmd {
    match action {
        FormAction::NextField => {
            model.commit_edit();
            model.focus = model.focus.next();
        }
        FormAction::PrevField => {
            model.commit_edit();
            model.focus = model.focus.prev();
        }
        FormAction::Increase => adjust(model, 1),
        FormAction::Decrease => adjust(model, -1),
        FormAction::Insert(c) => insert(model, c),
        FormAction::Backspace => backspace(model),
        FormAction::Submit => return submit(model),
        FormAction::Quit => {
            model.quit = true;
            return FormCmd::Quit;
        }
        FormAction::Ignore => {}
    }
    FormCmd::None
}

fn adjust(model: &mut FormModel, direction: i32) {
    model.commit_edit();
    match model.focus {
        Field::Smoker => model.form.smoker = !model.form.smoker,
        Field::Occupation => {
            model.form.occupation = if direction > 0 {
                model.form.occupation.next()
            } else {
                model.form.occupation.prev()
            };
        }
        field => {
            if let Some(numeric) = field.numeric() {
                model.form.nudge(numeric, direction);
            }
        }
    }
}

fn insert(model: &mut FormModel, c: char) {
    match model.focus {
        Field::City => model.form.city.push(c),
        Field::Smoker => match c.to_ascii_lowercase() {
            'y' => model.form.smoker = true,
            'n' => model.form.smoker = false,
            ' ' => model.form.smoker = !model.form.smoker,
            _ => {}
        },
        Field::Occupation if c == ' ' => model.form.occupation = model.form.occupation.next(),
        field => {
            let Some(numeric) = field.numeric() else {
                return;
            };
            let accepted = c.is_ascii_digit() || (c == '.' && !numeric.is_integer());
            if accepted {
                model.edit_buffer.get_or_insert_with(String::new).push(c);
            }
        }
    }
}

fn backspace(model: &mut FormModel) {
    match model.focus {
        Field::City => {
            model.form.city.pop();
        }
        field => {
            if let Some(numeric) = field.numeric() {
                let text = model.numeric_text(numeric);
                let buffer = model.edit_buffer.get_or_insert(text);
                buffer.pop();
            }
        }
    }
}

/// Validate locally; only a valid form produces a request command.
fn submit(model: &mut FormModel) -> FormCmd {
    model.commit_edit();
    match PredictionRequest::from_form(&model.form) {
        Ok(request) => {
            model.phase = SubmissionPhase::Requesting;
            model.result = None;
            FormCmd::Submit(request)
        }
        Err(err) => {
            model.result = Some(RenderedResult::from_error(&err));
            FormCmd::None
        }
    }
}
