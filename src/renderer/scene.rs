//! Scene building
//!
//! Turns a simulation snapshot into an ordered list of draw commands in field
//! coordinates. Backends only need to know how to draw these five shapes.

use glam::Vec2;

use crate::color::Color;
use crate::config::{Config, DividerStyle, Palette};
use crate::sim::{Field, Side, SimulationState};

/// Score text baseline, measured from the top of the field
pub const SCORE_BASELINE_Y: f32 = 50.0;
/// Height of score digits (cap height of a 40px UI font)
pub const SCORE_GLYPH_HEIGHT: f32 = 30.0;

/// A single drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: f32,
        gap: f32,
        thickness: f32,
        color: Color,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Left-aligned number sitting on `baseline`
    Number {
        value: u32,
        baseline: Vec2,
        height: f32,
        color: Color,
    },
}

/// Cosmetic parameters that are not part of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneStyle {
    pub palette: Palette,
    pub divider: DividerStyle,
}

impl From<&Config> for SceneStyle {
    fn from(config: &Config) -> Self {
        Self {
            palette: config.palette,
            divider: config.divider,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub field: Field,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn from_state(state: &SimulationState, style: &SceneStyle) -> Self {
        let field = state.field;
        let palette = &style.palette;
        let mid_x = field.width / 2.0;

        let mut commands = Vec::with_capacity(7);
        commands.push(DrawCommand::Clear(palette.background));
        commands.push(DrawCommand::DashedLine {
            from: Vec2::new(mid_x, 0.0),
            to: Vec2::new(mid_x, field.height),
            dash: style.divider.dash,
            gap: style.divider.gap,
            thickness: style.divider.thickness,
            color: palette.divider,
        });

        for side in [Side::Left, Side::Right] {
            let paddle = state.paddle(side);
            commands.push(DrawCommand::Rect {
                min: paddle.pos,
                size: paddle.size,
                color: paddle.color,
            });
        }

        commands.push(DrawCommand::Circle {
            center: state.ball.pos,
            radius: state.ball.radius,
            color: state.ball.color,
        });

        commands.push(DrawCommand::Number {
            value: state.scores.left,
            baseline: Vec2::new(field.width / 4.0, SCORE_BASELINE_Y),
            height: SCORE_GLYPH_HEIGHT,
            color: palette.left_score,
        });
        commands.push(DrawCommand::Number {
            value: state.scores.right,
            baseline: Vec2::new(field.width * 3.0 / 4.0, SCORE_BASELINE_Y),
            height: SCORE_GLYPH_HEIGHT,
            color: palette.right_score,
        });

        Self { field, commands }
    }

    /// Background color, if the scene starts with a clear
    pub fn clear_color(&self) -> Option<Color> {
        match self.commands.first() {
            Some(DrawCommand::Clear(color)) => Some(*color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_scene() -> (SimulationState, Scene) {
        let config = Config::default();
        let mut state = SimulationState::new(&config, 3).unwrap();
        state.scores.left = 4;
        state.scores.right = 11;
        let scene = Scene::from_state(&state, &SceneStyle::from(&config));
        (state, scene)
    }

    #[test]
    fn test_command_order() {
        let (_, scene) = default_scene();
        let kinds: Vec<&str> = scene
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Clear(_) => "clear",
                DrawCommand::DashedLine { .. } => "divider",
                DrawCommand::Rect { .. } => "rect",
                DrawCommand::Circle { .. } => "circle",
                DrawCommand::Number { .. } => "number",
            })
            .collect();
        assert_eq!(
            kinds,
            ["clear", "divider", "rect", "rect", "circle", "number", "number"]
        );
    }

    #[test]
    fn test_entities_and_scores() {
        let (state, scene) = default_scene();
        assert_eq!(scene.clear_color(), Some(Palette::default().background));

        assert_eq!(
            scene.commands[1],
            DrawCommand::DashedLine {
                from: Vec2::new(400.0, 0.0),
                to: Vec2::new(400.0, 600.0),
                dash: 16.0,
                gap: 16.0,
                thickness: 1.0,
                color: Color::WHITE,
            }
        );
        assert_eq!(
            scene.commands[3],
            DrawCommand::Rect {
                min: Vec2::new(788.0, 250.0),
                size: Vec2::new(12.0, 100.0),
                color: state.right.color,
            }
        );
        assert_eq!(
            scene.commands[4],
            DrawCommand::Circle {
                center: Vec2::new(400.0, 300.0),
                radius: 10.0,
                color: Color::WHITE,
            }
        );
        assert!(matches!(
            scene.commands[5],
            DrawCommand::Number { value: 4, baseline, .. } if baseline == Vec2::new(200.0, 50.0)
        ));
        assert!(matches!(
            scene.commands[6],
            DrawCommand::Number { value: 11, baseline, .. } if baseline == Vec2::new(600.0, 50.0)
        ));
    }
}
