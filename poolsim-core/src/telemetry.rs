//! Speed and kinetic-energy time series for graphing collaborators.

use std::collections::VecDeque;

use crate::body::Body;

/// Scrolling sample window with a time axis shared by every ball
#[derive(Debug)]
pub struct Telemetry {
    capacity: usize,
    times: VecDeque<f32>,
    speeds: Vec<VecDeque<f32>>,
    energies: Vec<VecDeque<f32>>,
}

impl Telemetry {
    /// Size the window for `window_seconds` of history at `frame_rate`.
    pub fn new(num_bodies: usize, window_seconds: f32, frame_rate: f32) -> Self {
        let capacity = (window_seconds * frame_rate).ceil().max(1.0) as usize;
        Self {
            capacity,
            times: VecDeque::with_capacity(capacity),
            speeds: (0..num_bodies)
                .map(|_| VecDeque::with_capacity(capacity))
                .collect(),
            energies: (0..num_bodies)
                .map(|_| VecDeque::with_capacity(capacity))
                .collect(),
        }
    }

    /// Append one sample per ball; pocketed balls record zeroes.
    pub fn record(&mut self, time: f32, bodies: &[Body]) {
        debug_assert_eq!(bodies.len(), self.speeds.len());
        if self.times.len() == self.capacity {
            self.times.pop_front();
            for series in &mut self.speeds {
                series.pop_front();
            }
            for series in &mut self.energies {
                series.pop_front();
            }
        }
        self.times.push_back(time);
        for (i, body) in bodies.iter().enumerate() {
            let (speed, energy) = if body.pocketed {
                (0.0, 0.0)
            } else {
                (body.speed, body.kinetic_energy())
            };
            self.speeds[i].push_back(speed);
            self.energies[i].push_back(energy);
        }
    }

    pub fn times(&self) -> &VecDeque<f32> {
        &self.times
    }

    pub fn speeds(&self, ball: usize) -> &VecDeque<f32> {
        &self.speeds[ball]
    }

    pub fn energies(&self, ball: usize) -> &VecDeque<f32> {
        &self.energies[ball]
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn clear(&mut self) {
        self.times.clear();
        for series in &mut self.speeds {
            series.clear();
        }
        for series in &mut self.energies {
            series.clear();
        }
    }
}
