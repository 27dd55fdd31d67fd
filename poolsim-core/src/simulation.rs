//! Frame orchestration: strike, motion, collisions, pockets, terminal state.

use glam::Vec2;
use log::{debug, info};

use crate::body::Body;
use crate::collision::{resolve_collision, RestitutionPolicy};
use crate::config::{CollisionModel, ConfigError, SimConfig};
use crate::integrator::integrate;
use crate::pockets::is_captured;
use crate::sound::CollisionSound;
use crate::strike::{HitSpot, Strike};

/// Index of the cue ball in the body sequence
pub const CUE_BALL: usize = 0;

/// One self-contained table: the body sequence plus per-run state.
///
/// All mutation happens inside [`Simulation::step`]; collaborators read the
/// body slice between frames and feed at most one strike back in.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    pockets: Vec<Vec2>,
    bodies: Vec<Body>,
    pending_strike: Option<Strike>,
    selected_spot: HitSpot,
    elapsed: f32,
    game_over: bool,
}

impl Simulation {
    /// Validate the configuration and set up the initial rack.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pockets = config.table.pocket_centers();
        let bodies = spawn_rack(&config);
        Ok(Self {
            config,
            pockets,
            bodies,
            pending_strike: None,
            selected_spot: HitSpot::default(),
            elapsed: 0.0,
            game_over: false,
        })
    }

    /// Discard every ball and re-rack from the configured spawn list.
    pub fn reset(&mut self) {
        self.bodies = spawn_rack(&self.config);
        self.pending_strike = None;
        self.selected_spot = HitSpot::default();
        self.elapsed = 0.0;
        self.game_over = false;
        info!("simulation reset");
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn cue_ball(&self) -> &Body {
        &self.bodies[CUE_BALL]
    }

    /// Simulated seconds since construction or the last reset
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Seconds of simulated time per frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.config.physics.frame_rate
    }

    pub fn selected_hit_spot(&self) -> HitSpot {
        self.selected_spot
    }

    pub fn select_hit_spot(&mut self, spot: HitSpot) {
        self.selected_spot = spot;
    }

    /// True when every active ball is at or below the rest epsilon
    pub fn all_at_rest(&self) -> bool {
        let epsilon = self.config.physics.rest_epsilon;
        self.bodies.iter().all(|b| b.pocketed || !b.is_moving(epsilon))
    }

    /// Queue a strike for the next step, aimed with the selected hit spot.
    ///
    /// Turn gating lives here, not in the mapper: the strike is rejected
    /// while any ball is moving, the cue ball is pocketed, or the game is
    /// over. Returns whether the strike was accepted.
    pub fn queue_strike(&mut self, drag: Vec2) -> bool {
        if self.game_over || self.bodies[CUE_BALL].pocketed || !self.all_at_rest() {
            return false;
        }
        self.pending_strike = Some(Strike::new(drag, self.selected_spot));
        true
    }

    /// Advance the table by one fixed-timestep frame.
    ///
    /// Order within the frame is load-bearing: pending strike, then
    /// per-body integration interleaved with pairwise resolution (each
    /// unordered pair exactly once, as (i, j) with i < j), then pocket
    /// capture, then the terminal check. Reordering changes observable
    /// trajectories near the corners.
    pub fn step(&mut self, sound: &mut dyn CollisionSound) -> bool {
        if let Some(strike) = self.pending_strike.take() {
            if let Some(impulse) = strike.impulse(&self.config.strike) {
                let cue = &mut self.bodies[CUE_BALL];
                cue.velocity += impulse / cue.mass;
                cue.refresh_speed();
                debug!("strike applied, cue speed {:.3}", cue.speed);
            }
        }

        let policy = match self.config.collision_model {
            CollisionModel::Elastic => RestitutionPolicy::Elastic,
            CollisionModel::Materials => RestitutionPolicy::ByMaterial(&self.config.materials),
        };

        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let body = &mut head[i];
            integrate(body, &self.config.table, &self.config.physics, sound);
            for other in tail.iter_mut() {
                resolve_collision(body, other, self.config.table.ball_radius, policy, sound);
            }
        }

        // Pockets are checked only after all movement and contacts; a ball
        // knocked into a corner pocket this frame still rebounds first.
        for body in &mut self.bodies {
            if !body.pocketed && is_captured(body, &self.pockets, self.config.table.pocket_radius)
            {
                body.pocket();
                info!("ball captured at ({:.1}, {:.1})", body.position.x, body.position.y);
            }
        }

        if !self.game_over {
            let cue_lost = self.bodies[CUE_BALL].pocketed;
            let table_cleared = self.bodies[CUE_BALL + 1..].iter().all(|b| b.pocketed);
            if cue_lost || table_cleared {
                self.game_over = true;
                info!(
                    "game over: {}",
                    if cue_lost { "cue ball pocketed" } else { "table cleared" }
                );
            }
        }

        self.elapsed += self.frame_dt();
        self.game_over
    }
}

fn spawn_rack(config: &SimConfig) -> Vec<Body> {
    config.balls.iter().map(Body::from_spawn).collect()
}
