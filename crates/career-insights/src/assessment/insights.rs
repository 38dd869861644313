use std::collections::BTreeMap;

use super::domain::{Domain, DomainScore, FailureFactor, InsightBundle, Level, Locale};
use super::policy::MAX_FAILURE_FACTORS;

type Bilingual = (&'static str, &'static str);

struct DomainNarrative {
    strength: Bilingual,
    developing: Bilingual,
    growth_area: Bilingual,
    next_step: Bilingual,
    developing_step: Bilingual,
    factor_icon: &'static str,
    factor_title: Bilingual,
    factor_description: Bilingual,
}

fn pick(text: Bilingual, locale: Locale) -> String {
    match locale {
        Locale::En => text.0.to_string(),
        Locale::Es => text.1.to_string(),
    }
}

const STRETCH_STEP: Bilingual = (
    "You scored as a strength in every area. Look for a mentoring or preceptor role so others can learn from how you work.",
    "Obtuviste fortalezas en todas las áreas. Busca un rol de mentoría o de preceptor para que otros aprendan de tu forma de trabajar.",
);

fn narrative(domain: Domain) -> DomainNarrative {
    match domain {
        Domain::Mission => DomainNarrative {
            strength: (
                "You consistently put patient access and the health center's mission first, even when it takes extra effort.",
                "Pones de manera constante el acceso de los pacientes y la misión del centro de salud en primer lugar, aun cuando requiere un esfuerzo adicional.",
            ),
            developing: (
                "You care about the communities the health center serves and are learning how that mission shapes daily decisions.",
                "Te importan las comunidades que atiende el centro de salud y estás aprendiendo cómo esa misión guía las decisiones diarias.",
            ),
            growth_area: (
                "Connecting everyday choices to the health center's mission of serving everyone is an area to build.",
                "Relacionar las decisiones diarias con la misión del centro de salud de atender a todos es un área por fortalecer.",
            ),
            next_step: (
                "Ask your manager how your center's sliding-fee program and community needs assessment shape the services you deliver.",
                "Pregunta a tu gerente cómo el programa de tarifas variables y la evaluación de necesidades comunitarias de tu centro definen los servicios que ofreces.",
            ),
            developing_step: (
                "Pick one patient story each week and note how your work removed a barrier to care.",
                "Elige la historia de un paciente cada semana y anota cómo tu trabajo eliminó una barrera para la atención.",
            ),
            factor_icon: "heart",
            factor_title: ("Losing sight of the mission", "Perder de vista la misión"),
            factor_description: (
                "Employers at community health centers look for people who stay focused on access for underserved patients. Practice explaining why that mission matters to you.",
                "Los empleadores de los centros de salud comunitarios buscan personas enfocadas en el acceso para pacientes desatendidos. Practica explicar por qué esa misión es importante para ti.",
            ),
        },
        Domain::People => DomainNarrative {
            strength: (
                "You build trust quickly with patients and coworkers and handle tense moments with calm and respect.",
                "Generas confianza rápidamente con pacientes y compañeros y manejas los momentos tensos con calma y respeto.",
            ),
            developing: (
                "You relate well to others and are growing your confidence in difficult conversations.",
                "Te relacionas bien con los demás y estás ganando confianza en las conversaciones difíciles.",
            ),
            growth_area: (
                "Handling conflict and communicating across language and cultural differences is an area to build.",
                "Manejar conflictos y comunicarte a través de diferencias de idioma y cultura es un área por fortalecer.",
            ),
            next_step: (
                "Take a de-escalation or cultural humility training and practice teach-back with your next patients.",
                "Toma una capacitación sobre desescalamiento o humildad cultural y practica el método de repetir lo aprendido con tus próximos pacientes.",
            ),
            developing_step: (
                "Ask a trusted coworker to observe one patient interaction and share one thing to improve.",
                "Pide a un compañero de confianza que observe una interacción con un paciente y te comparta un aspecto a mejorar.",
            ),
            factor_icon: "users",
            factor_title: ("Avoiding hard conversations", "Evitar las conversaciones difíciles"),
            factor_description: (
                "Team-based care depends on addressing problems directly and respectfully. Small, early conversations prevent bigger breakdowns.",
                "La atención en equipo depende de abordar los problemas de forma directa y respetuosa. Las conversaciones tempranas evitan problemas mayores.",
            ),
        },
        Domain::Execution => DomainNarrative {
            strength: (
                "You organize competing priorities well and follow through until problems are actually solved.",
                "Organizas bien las prioridades que compiten entre sí y das seguimiento hasta que los problemas se resuelven.",
            ),
            developing: (
                "You get your work done and are building habits for prioritizing and closing the loop.",
                "Cumples con tu trabajo y estás desarrollando hábitos para priorizar y cerrar ciclos.",
            ),
            growth_area: (
                "Prioritizing under pressure and following through on process problems is an area to build.",
                "Priorizar bajo presión y dar seguimiento a los problemas de proceso es un área por fortalecer.",
            ),
            next_step: (
                "Start each day by ranking tasks by patient impact and deadline, and share what might slip with your lead before noon.",
                "Comienza cada día ordenando tus tareas según el impacto en los pacientes y los plazos, y comparte con tu líder antes del mediodía lo que podría retrasarse.",
            ),
            developing_step: (
                "Keep a simple follow-up list for issues you raise and check it at the end of each week.",
                "Lleva una lista sencilla de seguimiento de los asuntos que planteas y revísala al final de cada semana.",
            ),
            factor_icon: "clipboard-check",
            factor_title: ("Dropping the follow-through", "Descuidar el seguimiento"),
            factor_description: (
                "Referrals, callbacks, and reports only help patients when someone closes the loop. Employers notice who follows up without being asked.",
                "Las referencias, llamadas y reportes solo ayudan a los pacientes cuando alguien cierra el ciclo. Los empleadores notan quién da seguimiento sin que se lo pidan.",
            ),
        },
        Domain::Growth => DomainNarrative {
            strength: (
                "You treat feedback and new systems as chances to learn, and you help others grow along with you.",
                "Ves la retroalimentación y los nuevos sistemas como oportunidades para aprender, y ayudas a otros a crecer contigo.",
            ),
            developing: (
                "You are open to learning and are starting to seek out feedback and training on your own.",
                "Estás abierto a aprender y empiezas a buscar retroalimentación y capacitación por tu cuenta.",
            ),
            growth_area: (
                "Seeking out feedback and new skills, even when it is uncomfortable, is an area to build.",
                "Buscar retroalimentación y nuevas habilidades, aun cuando resulte incómodo, es un área por fortalecer.",
            ),
            next_step: (
                "Schedule a monthly check-in with your supervisor focused on one skill, and ask about tuition or certification support.",
                "Programa una reunión mensual con tu supervisor enfocada en una habilidad y pregunta sobre apoyo para colegiaturas o certificaciones.",
            ),
            developing_step: (
                "Choose one training or certification that fits your next role and set a start date.",
                "Elige una capacitación o certificación que se ajuste a tu próximo puesto y fija una fecha de inicio.",
            ),
            factor_icon: "sprout",
            factor_title: ("Standing still", "Estancarse"),
            factor_description: (
                "Health centers change fast with new protocols and technology. Staff who keep learning are the ones promoted into new roles.",
                "Los centros de salud cambian rápido con nuevos protocolos y tecnología. El personal que sigue aprendiendo es el que asciende a nuevos puestos.",
            ),
        },
        Domain::Transition => DomainNarrative {
            strength: (
                "You prepare thoughtfully for change and can clearly show how your experience fits a new role.",
                "Te preparas con cuidado para los cambios y puedes mostrar con claridad cómo tu experiencia se ajusta a un nuevo puesto.",
            ),
            developing: (
                "You are getting ready for your next step and are learning how to present your experience.",
                "Te estás preparando para tu siguiente paso y aprendiendo a presentar tu experiencia.",
            ),
            growth_area: (
                "Translating your experience into results employers recognize is an area to build.",
                "Traducir tu experiencia en resultados que los empleadores reconozcan es un área por fortalecer.",
            ),
            next_step: (
                "Rewrite three resume bullets to show measurable results and practice answering why you want to work at a health center.",
                "Reescribe tres puntos de tu currículum para mostrar resultados medibles y practica cómo responder por qué quieres trabajar en un centro de salud.",
            ),
            developing_step: (
                "Set up an informational interview with someone already in the role you want.",
                "Agenda una entrevista informativa con alguien que ya ocupe el puesto que deseas.",
            ),
            factor_icon: "compass",
            factor_title: ("Underselling your experience", "Subestimar tu experiencia"),
            factor_description: (
                "Hiring managers need to see how your past work connects to their patients. Listing duties without results makes strong candidates easy to overlook.",
                "Los gerentes de contratación necesitan ver cómo tu trabajo anterior se relaciona con sus pacientes. Enumerar funciones sin resultados hace que buenos candidatos pasen desapercibidos.",
            ),
        },
    }
}

fn level_of(domain_scores: &BTreeMap<Domain, DomainScore>, domain: Domain) -> Option<Level> {
    domain_scores
        .get(&domain)
        .filter(|score| score.is_scored())
        .map(|score| score.level)
}

/// Builds the narrative sections from classified scores using the fixed text table.
pub fn generate_insights(
    domain_scores: &BTreeMap<Domain, DomainScore>,
    top_strength: Domain,
    top_growth_area: Domain,
    locale: Locale,
) -> InsightBundle {
    let mut insights = InsightBundle::default();

    for domain in Domain::ordered() {
        match level_of(domain_scores, domain) {
            Some(Level::Strength) => {
                insights
                    .strengths
                    .push(pick(narrative(domain).strength, locale));
            }
            Some(Level::GrowthArea) => {
                let text = narrative(domain);
                insights.growth_areas.push(pick(text.growth_area, locale));
                insights.next_steps.push(pick(text.next_step, locale));
            }
            Some(Level::Developing) | None => {}
        }
    }

    if insights.strengths.is_empty() && level_of(domain_scores, top_strength).is_some() {
        insights
            .strengths
            .push(pick(narrative(top_strength).developing, locale));
    }

    if insights.growth_areas.is_empty() {
        match level_of(domain_scores, top_growth_area) {
            Some(Level::Developing) => {
                let text = narrative(top_growth_area);
                insights.growth_areas.push(pick(text.developing, locale));
                insights.next_steps.push(pick(text.developing_step, locale));
            }
            Some(Level::Strength) => insights.next_steps.push(pick(STRETCH_STEP, locale)),
            _ => {}
        }
    }

    insights
}

/// Coaching notes for the lowest-scoring domains that are not yet strengths.
pub fn failure_factors(
    domain_scores: &BTreeMap<Domain, DomainScore>,
    locale: Locale,
) -> Option<Vec<FailureFactor>> {
    let mut candidates: Vec<(Domain, u8)> = Domain::ordered()
        .into_iter()
        .filter_map(|domain| {
            domain_scores
                .get(&domain)
                .filter(|score| score.is_scored() && score.level != Level::Strength)
                .map(|score| (domain, score.percentage))
        })
        .collect();

    // stable sort keeps priority order among equal percentages
    candidates.sort_by_key(|(_, percentage)| *percentage);

    let factors: Vec<FailureFactor> = candidates
        .into_iter()
        .take(MAX_FAILURE_FACTORS)
        .map(|(domain, _)| {
            let text = narrative(domain);
            FailureFactor {
                domain,
                icon: text.factor_icon.to_string(),
                title: pick(text.factor_title, locale),
                description: pick(text.factor_description, locale),
            }
        })
        .collect();

    if factors.is_empty() {
        None
    } else {
        Some(factors)
    }
}
