// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Labeled inputs for the profile form.

use crate::models::profile::ProfileField;

/// Messages emitted by the profile fields view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileFieldsMsg {
    Changed(ProfileField, String),
    /// Enter pressed in a single-line input.
    SubmitPressed,
}

/// Render one input per profile field and return any messages triggered by user interaction.
pub fn view<'a>(
    ui: &mut egui::Ui,
    value_of: impl Fn(ProfileField) -> &'a str,
) -> Vec<ProfileFieldsMsg> {
    let mut msgs = Vec::new();

    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 10.0))
        .min_col_width(100.0)
        .show(ui, |ui| {
            for field in ProfileField::ALL {
                ui.label(field.label());
                render_input(ui, field, value_of(field), &mut msgs);
                ui.end_row();
            }
        });

    msgs
}

fn render_input(
    ui: &mut egui::Ui,
    field: ProfileField,
    current: &str,
    msgs: &mut Vec<ProfileFieldsMsg>,
) {
    let mut text = current.to_string();
    let multiline = matches!(field, ProfileField::Bio);
    let edit = if multiline {
        egui::TextEdit::multiline(&mut text).desired_rows(4)
    } else {
        egui::TextEdit::singleline(&mut text)
    };
    let response = ui.add(
        edit.id_salt(field.id())
            .hint_text(field.hint())
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        msgs.push(ProfileFieldsMsg::Changed(field, text));
    }

    // Mirror browser forms: Enter in a single-line input submits.
    if !multiline && response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(ProfileFieldsMsg::SubmitPressed);
    }
}
