use std::fmt;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// The four phases of the simulated 28-day cycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

impl CyclePhase {
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulatory,
        CyclePhase::Luteal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstrual",
            CyclePhase::Follicular => "Follicular",
            CyclePhase::Ovulatory => "Ovulatory",
            CyclePhase::Luteal => "Luteal",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Simulated readiness profile for one phase, all on 0-100 scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseProfile {
    pub phase: CyclePhase,
    pub energy: u8,
    pub strength: u8,
    pub endurance: u8,
    pub recovery: u8,
    pub recommended_intensity: u8,
}

pub const PHASE_PROFILES: [PhaseProfile; 4] = [
    PhaseProfile {
        phase: CyclePhase::Menstrual,
        energy: 60,
        strength: 65,
        endurance: 55,
        recovery: 50,
        recommended_intensity: 60,
    },
    PhaseProfile {
        phase: CyclePhase::Follicular,
        energy: 80,
        strength: 85,
        endurance: 75,
        recovery: 70,
        recommended_intensity: 90,
    },
    PhaseProfile {
        phase: CyclePhase::Ovulatory,
        energy: 95,
        strength: 90,
        endurance: 90,
        recovery: 85,
        recommended_intensity: 95,
    },
    PhaseProfile {
        phase: CyclePhase::Luteal,
        energy: 70,
        strength: 75,
        endurance: 65,
        recovery: 60,
        recommended_intensity: 75,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Workout {
    pub name: &'static str,
    pub intensity: u8,
    pub duration_min: u8,
}

const MENSTRUAL_WORKOUTS: [Workout; 3] = [
    Workout { name: "Light Jog", intensity: 50, duration_min: 25 },
    Workout { name: "Recovery Walk", intensity: 30, duration_min: 40 },
    Workout { name: "Gentle Yoga", intensity: 45, duration_min: 30 },
];

const FOLLICULAR_WORKOUTS: [Workout; 3] = [
    Workout { name: "Hill Sprints", intensity: 75, duration_min: 30 },
    Workout { name: "Tempo Run", intensity: 70, duration_min: 40 },
    Workout { name: "Long Run", intensity: 65, duration_min: 60 },
];

const OVULATORY_WORKOUTS: [Workout; 3] = [
    Workout { name: "HIIT Session", intensity: 90, duration_min: 35 },
    Workout { name: "Race Pace Run", intensity: 85, duration_min: 45 },
    Workout { name: "Speed Intervals", intensity: 95, duration_min: 30 },
];

const LUTEAL_WORKOUTS: [Workout; 3] = [
    Workout { name: "Steady State", intensity: 65, duration_min: 45 },
    Workout { name: "Fartlek Training", intensity: 70, duration_min: 35 },
    Workout { name: "Cross Training", intensity: 60, duration_min: 40 },
];

/// Three suggested sessions per phase.
pub fn workouts(phase: CyclePhase) -> &'static [Workout; 3] {
    match phase {
        CyclePhase::Menstrual => &MENSTRUAL_WORKOUTS,
        CyclePhase::Follicular => &FOLLICULAR_WORKOUTS,
        CyclePhase::Ovulatory => &OVULATORY_WORKOUTS,
        CyclePhase::Luteal => &LUTEAL_WORKOUTS,
    }
}

pub fn advice(phase: CyclePhase) -> &'static [&'static str; 4] {
    match phase {
        CyclePhase::Menstrual => &[
            "Focus on gentle recovery workouts",
            "Pay extra attention to iron-rich foods",
            "Prioritize sleep and hydration",
            "Consider shorter but more frequent sessions",
        ],
        CyclePhase::Follicular => &[
            "Great time to work on building strength",
            "Your body can handle more intensity now",
            "Good phase for trying new workout routines",
            "Focus on skill development and technique",
        ],
        CyclePhase::Ovulatory => &[
            "Peak performance window - ideal for tests or races",
            "Body is primed for high-intensity workouts",
            "Recovery tends to be efficient in this phase",
            "Good time to push for personal records",
        ],
        CyclePhase::Luteal => &[
            "Focus on maintaining rather than building",
            "Pay attention to cooling down properly",
            "You may need more carbohydrates for energy",
            "Adjust expectations as fatigue may increase",
        ],
    }
}

pub const CYCLE_DAYS: u8 = 28;

/// Phase occupied on a 1-based day of the 28-day model cycle:
/// days 1-5 menstrual, 6-14 follicular, 15-17 ovulatory, 18-28 luteal.
pub fn phase_for_day(day: u8) -> CyclePhase {
    match day {
        1..=5 => CyclePhase::Menstrual,
        6..=14 => CyclePhase::Follicular,
        15..=17 => CyclePhase::Ovulatory,
        _ => CyclePhase::Luteal,
    }
}

/// Daily intensity draw band per phase, half-open.
fn intensity_band(phase: CyclePhase) -> Range<u8> {
    match phase {
        CyclePhase::Menstrual => 30..60,
        CyclePhase::Follicular => 60..80,
        CyclePhase::Ovulatory => 80..100,
        CyclePhase::Luteal => 50..75,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDay {
    pub day: u8,
    pub phase: CyclePhase,
    pub workout: &'static str,
    pub intensity: u8,
}

/// A 28-day plan: each day gets a workout drawn from its phase menu and an
/// intensity drawn from the phase band. A seed makes the draws reproducible.
pub fn training_plan(seed: Option<u64>) -> Vec<PlannedDay> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (1..=CYCLE_DAYS)
        .map(|day| {
            let phase = phase_for_day(day);
            let menu = workouts(phase);
            let workout = menu[rng.gen_range(0..menu.len())].name;
            PlannedDay {
                day,
                phase,
                workout,
                intensity: rng.gen_range(intensity_band(phase)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_partition_the_cycle() {
        let mut counts = [0usize; 4];
        for day in 1..=CYCLE_DAYS {
            let phase = phase_for_day(day);
            let slot = CyclePhase::ALL
                .iter()
                .position(|candidate| *candidate == phase)
                .unwrap();
            counts[slot] += 1;
        }
        assert_eq!(counts, [5, 9, 3, 11]);
    }

    #[test]
    fn profiles_cover_each_phase_once() {
        for phase in CyclePhase::ALL {
            let matching = PHASE_PROFILES
                .iter()
                .filter(|profile| profile.phase == phase)
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn seeded_plans_are_reproducible() {
        let first = training_plan(Some(7));
        let second = training_plan(Some(7));
        assert_eq!(first, second);
        assert_eq!(first.len(), usize::from(CYCLE_DAYS));
    }

    #[test]
    fn planned_days_stay_inside_their_phase() {
        for day in training_plan(Some(11)) {
            assert_eq!(day.phase, phase_for_day(day.day));

            let band = intensity_band(day.phase);
            assert!(band.contains(&day.intensity), "day {} out of band", day.day);

            let menu = workouts(day.phase);
            assert!(menu.iter().any(|workout| workout.name == day.workout));
        }
    }
}
