//! Reply-selection strategies for the scripted assistant.
//!
//! # Responsibility
//! - Define the strategy seam between the responder and reply-text selection.
//! - Ship the two hand-authored canned pools used by the product: one for the
//!   floating widget, one for the full assistant page.

use crate::model::chat::ChatMessage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Greeting seeded into the floating-widget transcript.
pub const WIDGET_GREETING: &str = "¡Hola! Soy tu asistente virtual de HOLISTICA. ¿Cómo puedo \
ayudarte hoy? Puedo ayudarte con tareas académicas, técnicas de estudio, consejos de bienestar, \
menús saludables y mucho más.";

/// Greeting seeded into the assistant-page transcript.
pub const ASSISTANT_PAGE_GREETING: &str = "¡Hola! Soy tu asistente virtual de HOLISTICA. Puedo \
ayudarte con todas las funcionalidades de la plataforma: tareas académicas, bienestar emocional, \
alimentación, cursos y más. ¿En qué puedo asistirte hoy?";

const WIDGET_REPLIES: [&str; 4] = [
    "Entiendo tu consulta. Basándome en tu perfil, te recomiendo que organices tus tareas por \
prioridad usando la técnica Pomodoro.",
    "Para mejorar tu bienestar emocional, te sugiero practicar 5 minutos de respiración profunda. \
¿Te gustaría que te guíe?",
    "He revisado tu progreso académico y noto que has mejorado mucho. ¡Sigue así! ¿Hay alguna \
materia específica en la que necesites ayuda?",
    "Para mantener una alimentación balanceada, te recomiendo incluir más verduras en tu menú. \
¿Te gustaría que te sugiera algunas recetas?",
];

const ASSISTANT_PAGE_REPLIES: [&str; 4] = [
    "Entiendo tu consulta. Basándome en tu actividad reciente, te recomiendo priorizar las tareas \
académicas pendientes. ¿Te gustaría que te ayude a organizar tu cronograma?",
    "He analizado tu progreso en bienestar y noto que has mantenido un buen equilibrio. Para \
optimizar tu energía, te sugiero incorporar 10 minutos de meditación matutina.",
    "Según tus preferencias alimentarias, he preparado una lista de recetas saludables que se \
adaptan a tu horario. ¿Te gustaría ver las opciones para esta semana?",
    "Veo que tienes interés en mejorar profesionalmente. Te recomiendo 3 cursos que complementan \
tu perfil académico actual. ¿Quieres conocer los detalles?",
];

/// Produces the next assistant reply for a transcript.
///
/// The responder calls this exactly once per due reply; implementations may
/// inspect the transcript but the shipped pools ignore it.
pub trait ResponseStrategy {
    fn next_reply(&mut self, transcript: &[ChatMessage]) -> String;
}

/// Uniform random selection from a fixed, hand-authored reply pool.
#[derive(Debug, Clone)]
pub struct CannedPool {
    replies: Vec<String>,
    rng: StdRng,
}

impl CannedPool {
    /// Builds a pool from arbitrary reply strings with an entropy-seeded RNG.
    ///
    /// Empty pools are not meaningful; callers use the shipped constructors
    /// or pass at least one reply.
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same pool with a fixed RNG seed, for deterministic tests.
    pub fn with_seed(replies: Vec<String>, seed: u64) -> Self {
        Self {
            replies,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The pool used by the floating chat widget.
    pub fn widget_pool() -> Self {
        Self::new(WIDGET_REPLIES.iter().map(|reply| reply.to_string()).collect())
    }

    /// The pool used by the full assistant page.
    pub fn assistant_page_pool() -> Self {
        Self::new(
            ASSISTANT_PAGE_REPLIES
                .iter()
                .map(|reply| reply.to_string())
                .collect(),
        )
    }

    /// Candidate replies in pool order.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }
}

impl ResponseStrategy for CannedPool {
    fn next_reply(&mut self, _transcript: &[ChatMessage]) -> String {
        let index = self.rng.gen_range(0..self.replies.len());
        self.replies[index].clone()
    }
}
