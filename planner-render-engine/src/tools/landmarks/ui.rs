use bevy::prelude::*;

use super::state::{
    CollapseButton, CollapseLabel, LandmarkButton, LandmarkPanelBody, LandmarkPanelRoot,
    LandmarkPanelUiState, PanelHeaderNode, PanelTitleText, PickingStatusText, PlanningSession,
};
use planning_core::{LandmarkId, PickingState};

// Spawns the landmark panel with one selection button per landmark name
pub fn spawn_landmark_panel(mut commands: Commands, state: Res<LandmarkPanelUiState>) {
    let width = if state.collapsed {
        state.closed_width
    } else {
        state.open_width
    };
    let body_display = if state.collapsed {
        Display::None
    } else {
        Display::Flex
    };

    commands
        .spawn((
            LandmarkPanelRoot,
            Name::new("LandmarkPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (12.0, 28.0) };

            parent
                .spawn((
                    PanelHeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed {
                            JustifyContent::FlexEnd
                        } else {
                            JustifyContent::SpaceBetween
                        },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        PanelTitleText,
                        Name::new("Title"),
                        Text::new("Landmarks"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        Node {
                            display: if state.collapsed {
                                Display::None
                            } else {
                                Display::Flex
                            },
                            ..default()
                        },
                    ));

                    let chevron = if state.collapsed { ">" } else { "<" };
                    header
                        .spawn((
                            CollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(btn),
                                height: Val::Px(btn),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                CollapseLabel,
                                Text::new(chevron),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });

            parent
                .spawn((
                    LandmarkPanelBody,
                    Name::new("Body"),
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(6.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        PickingStatusText,
                        Text::new("select a landmark to place"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.8, 0.8, 0.8)),
                    ));

                    for (index, id) in LandmarkId::ALL.into_iter().enumerate() {
                        spawn_landmark_button(body, index, id);
                    }
                });
        });
}

fn spawn_landmark_button(body: &mut ChildSpawnerCommands, index: usize, id: LandmarkId) {
    let key_hint = (index + 1) % 10;
    body.spawn((
        LandmarkButton(id),
        Button,
        Name::new(format!("{id}_button")),
        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(32.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::FlexStart,
            padding: UiRect::horizontal(Val::Px(8.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(format!("{key_hint}. {}", id.label())),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

pub fn apply_collapse_state(
    state: Res<LandmarkPanelUiState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<LandmarkPanelRoot>>,
        Query<&mut Node, With<LandmarkPanelBody>>,
        Query<&mut Node, With<PanelHeaderNode>>,
        Query<&mut Node, With<PanelTitleText>>,
        Query<&mut Node, With<CollapseButton>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed {
            state.closed_width
        } else {
            state.open_width
        });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed {
            Display::None
        } else {
            Display::Flex
        };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        let pad = if state.collapsed { 4.0 } else { 12.0 };
        n.padding = UiRect::all(Val::Px(pad));
        n.justify_content = if state.collapsed {
            JustifyContent::FlexEnd
        } else {
            JustifyContent::SpaceBetween
        };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed {
            Display::None
        } else {
            Display::Flex
        };
    }
    if let Ok(mut n) = nodes.p4().single_mut() {
        let s = if state.collapsed { 24.0 } else { 28.0 };
        n.width = Val::Px(s);
        n.height = Val::Px(s);
    }
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { ">" } else { "<" });
    }
}

/// Border highlight follows the picking state so the panel always shows
/// which name is armed or being edited.
pub fn reflect_landmark_buttons(
    session: Res<PlanningSession>,
    mut buttons: Query<(&LandmarkButton, &mut BorderColor)>,
) {
    if !session.is_changed() {
        return;
    }

    let active = match session.picking.state() {
        PickingState::Idle => None,
        PickingState::Placing(id) | PickingState::Editing(id) => Some(id),
    };

    for (button, mut border) in &mut buttons {
        *border = if active == Some(button.0) {
            BorderColor(Color::srgb(0.95, 0.75, 0.2))
        } else {
            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25))
        };
    }
}

pub fn reflect_status_text(
    session: Res<PlanningSession>,
    mut texts: Query<&mut Text, With<PickingStatusText>>,
) {
    if !session.is_changed() {
        return;
    }

    let label = match session.picking.state() {
        PickingState::Idle => "select a landmark to place".to_string(),
        PickingState::Placing(id) => format!("placing: {}", id.label()),
        PickingState::Editing(id) => format!("editing: {}", id.label()),
    };

    if let Ok(mut text) = texts.single_mut() {
        if text.0 != label {
            *text = Text::new(label);
        }
    }
}
