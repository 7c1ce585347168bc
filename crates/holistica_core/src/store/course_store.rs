//! Course catalog store. Static seed data, read-only accessors.

use crate::model::course::{
    CourseDifficulty, CourseKind, ExternalCourse, StudyStats, UniversityCourse,
};

/// State holder for the courses page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStore {
    university: Vec<UniversityCourse>,
    external: Vec<ExternalCourse>,
    stats: StudyStats,
}

impl CourseStore {
    /// Creates the store preloaded with the product fixture catalog.
    pub fn seed() -> Self {
        Self {
            university: seed_university_courses(),
            external: seed_external_courses(),
            stats: StudyStats {
                weekly_hours: 28,
                completed_courses: 12,
                average_grade: 8.7,
                study_streak_days: 15,
            },
        }
    }

    pub fn university_courses(&self) -> &[UniversityCourse] {
        &self.university
    }

    pub fn external_courses(&self) -> &[ExternalCourse] {
        &self.external
    }

    pub fn study_stats(&self) -> &StudyStats {
        &self.stats
    }

    /// University course progress percentages, catalog order.
    pub fn university_progress(&self) -> Vec<u8> {
        self.university.iter().map(|course| course.progress).collect()
    }
}

fn seed_university_courses() -> Vec<UniversityCourse> {
    vec![
        UniversityCourse {
            id: 1,
            name: "Cálculo Diferencial e Integral".to_string(),
            objective: "Dominar los conceptos fundamentales del cálculo para aplicaciones en ingeniería"
                .to_string(),
            schedule: "Lun, Mié, Jue 08:00-10:00".to_string(),
            university: "Universidad Nacional".to_string(),
            grade: "A-".to_string(),
            pending_tasks: 2,
            professor: "Dr. Ana Holística".to_string(),
            progress: 78,
        },
        UniversityCourse {
            id: 2,
            name: "Programación Orientada a Objetos".to_string(),
            objective: "Aprender paradigmas de POO y desarrollo de software escalable".to_string(),
            schedule: "Mar, Jue 14:00-16:00".to_string(),
            university: "Universidad Nacional".to_string(),
            grade: "A".to_string(),
            pending_tasks: 1,
            professor: "Ing. Carlos López".to_string(),
            progress: 85,
        },
        UniversityCourse {
            id: 3,
            name: "Física General II".to_string(),
            objective: "Comprender electromagnetismo y ondas en sistemas físicos".to_string(),
            schedule: "Lun, Mié, Vie 10:00-12:00".to_string(),
            university: "Universidad Nacional".to_string(),
            grade: "B+".to_string(),
            pending_tasks: 3,
            professor: "Dr. Miguel Holístico".to_string(),
            progress: 65,
        },
    ]
}

fn seed_external_courses() -> Vec<ExternalCourse> {
    vec![
        ExternalCourse {
            id: 1,
            name: "Desarrollo Web Full Stack".to_string(),
            provider: "TechAcademy".to_string(),
            kind: CourseKind::Course,
            duration: "12 semanas".to_string(),
            difficulty: CourseDifficulty::Intermediate,
            progress: 45,
            category: "Tecnología".to_string(),
            rating: 4.8,
        },
        ExternalCourse {
            id: 2,
            name: "Gestión de Proyectos Ágiles".to_string(),
            provider: "PMI Institute".to_string(),
            kind: CourseKind::Certification,
            duration: "8 semanas".to_string(),
            difficulty: CourseDifficulty::Intermediate,
            progress: 30,
            category: "Gestión".to_string(),
            rating: 4.9,
        },
        ExternalCourse {
            id: 3,
            name: "Diseño UX/UI Avanzado".to_string(),
            provider: "Design Pro".to_string(),
            kind: CourseKind::Workshop,
            duration: "6 semanas".to_string(),
            difficulty: CourseDifficulty::Advanced,
            progress: 70,
            category: "Diseño".to_string(),
            rating: 4.7,
        },
        ExternalCourse {
            id: 4,
            name: "Marketing Digital".to_string(),
            provider: "MarketingHub".to_string(),
            kind: CourseKind::Course,
            duration: "10 semanas".to_string(),
            difficulty: CourseDifficulty::Beginner,
            progress: 15,
            category: "Marketing".to_string(),
            rating: 4.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::CourseStore;
    use crate::metrics::average_progress;

    #[test]
    fn seed_matches_product_fixture() {
        let store = CourseStore::seed();
        assert_eq!(store.university_courses().len(), 3);
        assert_eq!(store.external_courses().len(), 4);
        assert_eq!(store.study_stats().weekly_hours, 28);
    }

    #[test]
    fn university_progress_feeds_average_metric() {
        let store = CourseStore::seed();
        // (78 + 85 + 65) / 3 = 76.
        assert_eq!(average_progress(&store.university_progress()), 76);
    }
}
