//! Scene model: the set of physical entities on the diagram and the
//! validated command interface that mutates it.
//!
//! Every worldline here is a fixed lab-frame curve; entities never store
//! boosted coordinates. The only frame-dependent step happens at render
//! time, when the current β is applied.

use thiserror::Error;

use crate::render::Color;

/// Ordered palette for velocity worldlines, assigned by insertion index.
pub const VELOCITY_PALETTE: [Color; 6] = [
    Color::rgb(0xfe, 0x00, 0x00), // red
    Color::rgb(0xff, 0x64, 0x00), // orange
    Color::rgb(0x00, 0x80, 0x00), // green
    Color::rgb(0x33, 0xff, 0xf0), // cyan
    Color::rgb(0x00, 0x00, 0xff), // blue
    Color::rgb(0xae, 0x00, 0xff), // purple
];

/// Fixed body color, distinct from the palette purple.
pub const CAT_COLOR: Color = Color::rgb(0x80, 0x00, 0x80);
pub const BARN_COLOR: Color = Color::rgb(0xff, 0x00, 0xdc);
pub const LADDER_COLOR: Color = Color::rgb(0x00, 0x71, 0xff);

pub const MAX_VELOCITIES: usize = 6;

/// A worldline x = v·t through the origin, moving at velocity v in the
/// lab frame.
#[derive(Debug, Clone, Copy)]
pub struct Velocity {
    pub v: f64,
    pub color: Color,
}

/// An extended rigid body at rest in the lab frame, bounded by two vertical
/// worldlines x = head and x = tail.
#[derive(Debug, Clone, Copy)]
pub struct Cat {
    pub head: f64,
    pub tail: f64,
    pub color: Color,
}

/// The ladder-barn paradox pair. The barn is a lab-frame body; the ladder is
/// already moving in the lab frame, its edges x = t/1.25 and x = t/1.25 - 2.
#[derive(Debug, Clone, Copy)]
pub struct LadderBarn {
    pub barn: Cat,
    pub ladder_color: Color,
    /// β in force when the pair was created. Kept for caller reference;
    /// redraws always re-boost from the lab frame.
    pub beta_at_creation: f64,
}

impl LadderBarn {
    /// Ladder leading edge at lab time t.
    pub fn ladder_left(t: f64) -> f64 {
        t / 1.25
    }

    /// Ladder trailing edge at lab time t.
    pub fn ladder_right(t: f64) -> f64 {
        t / 1.25 - 2.0
    }
}

/// Why a scene command was rejected. The scene is unchanged in every case.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("velocity must be a finite number with |v| < 1, got {0}")]
    InvalidVelocity(f64),
    #[error("maximum of {MAX_VELOCITIES} velocities reached")]
    TooManyVelocities,
    #[error("only one cat is allowed")]
    CatAlreadyAdded,
    #[error("ladder and barn already added")]
    LadderBarnAlreadyAdded,
    #[error("twin paradox already visualized")]
    TwinParadoxAlreadyShown,
    #[error("hyperbolas already visualized")]
    HyperbolasAlreadyShown,
}

/// All entities currently on the diagram.
#[derive(Debug, Default)]
pub struct Scene {
    velocities: Vec<Velocity>,
    cat: Option<Cat>,
    ladder_barn: Option<LadderBarn>,
    twin_paradox: bool,
    hyperbolas: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocities(&self) -> &[Velocity] {
        &self.velocities
    }

    pub fn cat(&self) -> Option<&Cat> {
        self.cat.as_ref()
    }

    pub fn ladder_barn(&self) -> Option<&LadderBarn> {
        self.ladder_barn.as_ref()
    }

    pub fn twin_paradox(&self) -> bool {
        self.twin_paradox
    }

    pub fn hyperbolas(&self) -> bool {
        self.hyperbolas
    }

    /// Appends a velocity worldline, taking the next palette color.
    pub fn add_velocity(&mut self, v: f64) -> Result<(), SceneError> {
        if !crate::relativity::special::valid_beta(v) {
            return Err(SceneError::InvalidVelocity(v));
        }
        if self.velocities.len() >= MAX_VELOCITIES {
            return Err(SceneError::TooManyVelocities);
        }
        let color = VELOCITY_PALETTE[self.velocities.len()];
        self.velocities.push(Velocity { v, color });
        Ok(())
    }

    /// Adds the single extended body, spanning x = 0 to x = 2.
    pub fn add_cat(&mut self) -> Result<(), SceneError> {
        if self.cat.is_some() {
            return Err(SceneError::CatAlreadyAdded);
        }
        self.cat = Some(Cat {
            head: 0.0,
            tail: 2.0,
            color: CAT_COLOR,
        });
        Ok(())
    }

    /// Adds the ladder-barn pair, freezing the caller's current β for
    /// reference.
    pub fn add_ladder_barn(&mut self, current_beta: f64) -> Result<(), SceneError> {
        if self.ladder_barn.is_some() {
            return Err(SceneError::LadderBarnAlreadyAdded);
        }
        self.ladder_barn = Some(LadderBarn {
            barn: Cat {
                head: 0.0,
                tail: 2.0,
                color: BARN_COLOR,
            },
            ladder_color: LADDER_COLOR,
            beta_at_creation: current_beta,
        });
        Ok(())
    }

    pub fn show_twin_paradox(&mut self) -> Result<(), SceneError> {
        if self.twin_paradox {
            return Err(SceneError::TwinParadoxAlreadyShown);
        }
        self.twin_paradox = true;
        Ok(())
    }

    pub fn show_hyperbolas(&mut self) -> Result<(), SceneError> {
        if self.hyperbolas {
            return Err(SceneError::HyperbolasAlreadyShown);
        }
        self.hyperbolas = true;
        Ok(())
    }

    /// Clears every entity and flag at once. There is no partial deletion.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
