//! Recording capabilities для unit тестов brain

use std::collections::HashMap;

use bevy::prelude::*;

use crate::ai::capabilities::{AnimationFlag, AnimationSink, NavigationDriver, Removal};

#[derive(Debug, Clone, PartialEq)]
pub enum NavCall {
    SetDestination(Vec3),
    SetStopped(bool),
    Halt,
    ResetPath,
    Configure { speed: f32, stopping_distance: f32 },
}

#[derive(Debug)]
pub struct RecordingNavigation {
    pub on_surface: bool,
    pub calls: Vec<NavCall>,
}

impl Default for RecordingNavigation {
    fn default() -> Self {
        Self {
            on_surface: true,
            calls: Vec::new(),
        }
    }
}

impl RecordingNavigation {
    pub fn off_surface() -> Self {
        Self {
            on_surface: false,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, call: &NavCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last_destination(&self) -> Option<Vec3> {
        self.calls.iter().rev().find_map(|call| match call {
            NavCall::SetDestination(destination) => Some(*destination),
            _ => None,
        })
    }
}

impl NavigationDriver for RecordingNavigation {
    fn set_destination(&mut self, destination: Vec3) {
        self.calls.push(NavCall::SetDestination(destination));
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.calls.push(NavCall::SetStopped(stopped));
    }

    fn halt(&mut self) {
        self.calls.push(NavCall::Halt);
    }

    fn reset_path(&mut self) {
        self.calls.push(NavCall::ResetPath);
    }

    fn is_on_traversable_surface(&self) -> bool {
        self.on_surface
    }

    fn configure(&mut self, speed: f32, stopping_distance: f32) {
        self.calls.push(NavCall::Configure { speed, stopping_distance });
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub flags: HashMap<&'static str, bool>,
    pub writes: usize,
}

impl RecordingAnimator {
    pub fn flag(&self, flag: AnimationFlag) -> Option<bool> {
        self.flags.get(flag.name()).copied()
    }
}

impl AnimationSink for RecordingAnimator {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool) {
        self.flags.insert(flag.name(), value);
        self.writes += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingRemoval {
    pub requests: Vec<f32>,
}

impl Removal for RecordingRemoval {
    fn remove_after(&mut self, delay_secs: f32) {
        self.requests.push(delay_secs);
    }
}
