//! User profile store. Static seed data, read-only accessors.

use crate::model::profile::{ProgressArea, UserProfile};

/// State holder for the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    profile: UserProfile,
    areas: Vec<ProgressArea>,
}

impl ProfileStore {
    /// Creates the store preloaded with the product fixture profile.
    pub fn seed() -> Self {
        Self {
            profile: UserProfile {
                name: "Ana Holística".to_string(),
                age: 22,
                career: "Ingeniería en Sistemas".to_string(),
                semester: "7mo semestre".to_string(),
                goals: vec![
                    "Mantener promedio superior a 8.5".to_string(),
                    "Mejorar gestión del estrés".to_string(),
                    "Alimentación más balanceada".to_string(),
                    "Completar curso de React".to_string(),
                ],
            },
            areas: vec![
                ProgressArea {
                    title: "Progreso Académico".to_string(),
                    value: 85,
                    description: "Excelente rendimiento este semestre".to_string(),
                },
                ProgressArea {
                    title: "Bienestar Emocional".to_string(),
                    value: 78,
                    description: "Mejorando manejo del estrés".to_string(),
                },
                ProgressArea {
                    title: "Salud Física".to_string(),
                    value: 70,
                    description: "Actividad física moderada".to_string(),
                },
                ProgressArea {
                    title: "Alimentación Saludable".to_string(),
                    value: 82,
                    description: "Buenos hábitos alimenticios".to_string(),
                },
            ],
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn progress_areas(&self) -> &[ProgressArea] {
        &self.areas
    }

    /// Progress area percentages, display order.
    pub fn area_values(&self) -> Vec<u8> {
        self.areas.iter().map(|area| area.value).collect()
    }
}
