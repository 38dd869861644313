use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{
    AnswerOption, AssessmentQuestion, CatalogError, Domain, LocalizedText, QuestionScope,
};
use super::roles::{RoleCatalog, RoleProfile};

/// Fixed catalog of scenario questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<AssessmentQuestion>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        let mut questions = universal_questions();
        questions.extend(role_questions());
        Self { questions }
    }

    pub fn new(questions: Vec<AssessmentQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[AssessmentQuestion] {
        &self.questions
    }

    pub fn get(&self, question_id: &str) -> Option<&AssessmentQuestion> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Universal questions in catalog order.
    pub fn universal(&self) -> Vec<&AssessmentQuestion> {
        self.questions
            .iter()
            .filter(|question| question.scope == QuestionScope::Universal)
            .collect()
    }

    /// Universal questions followed by the role's own scenarios.
    pub fn questions_for_role(&self, role: Option<&RoleProfile>) -> Vec<&AssessmentQuestion> {
        let mut questions = self.universal();
        if let Some(role) = role {
            questions.extend(
                role.questions
                    .iter()
                    .filter_map(|question_id| self.get(question_id)),
            );
        }
        questions
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self
            .questions
            .iter()
            .any(|question| question.scope == QuestionScope::Universal)
        {
            return Err(CatalogError::NoUniversalQuestions);
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.id.trim().is_empty() {
                return Err(CatalogError::EmptyQuestionId);
            }
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.len() < 2 {
                return Err(CatalogError::TooFewOptions {
                    question_id: question.id.clone(),
                    found: question.options.len(),
                });
            }

            let mut option_ids = BTreeSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
                if option.weights.values().all(|weight| *weight == 0) {
                    return Err(CatalogError::WeightlessOption {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Serialized catalog used to replace the built-in questions and roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub questions: Vec<AssessmentQuestion>,
    #[serde(default)]
    pub roles: Vec<RoleProfile>,
}

impl CatalogDocument {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Domains outside the closed enumeration fail here, before validation.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn into_parts(self) -> (QuestionBank, RoleCatalog) {
        (
            QuestionBank::new(self.questions),
            RoleCatalog::new(self.roles),
        )
    }
}

fn text(en: &str, es: &str) -> LocalizedText {
    LocalizedText::new(en, es)
}

fn option(id: &str, en: &str, es: &str, weights: &[(Domain, u8)]) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text(en, es),
        weights: weights.iter().copied().collect(),
    }
}

fn question(
    id: &str,
    domain: Domain,
    scope: QuestionScope,
    scenario: LocalizedText,
    prompt: LocalizedText,
    options: Vec<AnswerOption>,
) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        domain,
        scope,
        scenario,
        question: prompt,
        options,
    }
}

fn universal_questions() -> Vec<AssessmentQuestion> {
    use Domain::*;
    use QuestionScope::Universal;

    vec![
        question(
            "mission_1",
            Mission,
            Universal,
            text(
                "A patient arrives 20 minutes late because the bus was delayed. Today's schedule is full.",
                "Un paciente llega 20 minutos tarde porque el autobús se retrasó. La agenda de hoy está llena.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Find a way to fit them in or connect them with a same-day alternative. Access to care is why the clinic exists.",
                    "Buscar la manera de atenderlo o conectarlo con una alternativa el mismo día. El acceso a la atención es la razón de ser de la clínica.",
                    &[(Mission, 10), (People, 3)],
                ),
                option(
                    "b",
                    "Ask a supervisor what the policy allows before deciding.",
                    "Preguntar a un supervisor qué permite la política antes de decidir.",
                    &[(Mission, 6)],
                ),
                option(
                    "c",
                    "Reschedule them for the next open slot and explain the late policy.",
                    "Reprogramar la cita para el próximo espacio disponible y explicar la política de llegadas tarde.",
                    &[(Mission, 3)],
                ),
                option(
                    "d",
                    "Tell them they missed the appointment and need to call back.",
                    "Decirle que perdió la cita y que debe volver a llamar.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "mission_2",
            Mission,
            Universal,
            text(
                "Your health center begins serving a new neighborhood and some staff complain about the extra workload.",
                "Tu centro de salud comienza a atender a un nuevo vecindario y parte del personal se queja de la carga adicional de trabajo.",
            ),
            text("How do you respond?", "¿Cómo respondes?"),
            vec![
                option(
                    "a",
                    "Remind the team that the center serves everyone regardless of ability to pay, and offer to help design a smoother workflow.",
                    "Recordar al equipo que el centro atiende a todos sin importar su capacidad de pago y ofrecer ayuda para diseñar un flujo de trabajo más ágil.",
                    &[(Mission, 10), (Execution, 2)],
                ),
                option(
                    "b",
                    "Raise the concern with leadership and suggest slowing the expansion.",
                    "Plantear la preocupación a la dirección y sugerir que la expansión sea más lenta.",
                    &[(Mission, 5)],
                ),
                option(
                    "c",
                    "Stay neutral and focus on your own tasks.",
                    "Mantenerte neutral y enfocarte en tus propias tareas.",
                    &[(Mission, 3)],
                ),
                option(
                    "d",
                    "Agree that the workload is unfair.",
                    "Estar de acuerdo en que la carga de trabajo es injusta.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "mission_3",
            Mission,
            Universal,
            text(
                "A grant report is due and the count of uninsured patients looks lower than what you see at the front desk every day.",
                "Se acerca la entrega de un informe de subvención y el número de pacientes sin seguro parece menor de lo que ves a diario en la recepción.",
            ),
            text("What is your next step?", "¿Cuál es tu siguiente paso?"),
            vec![
                option(
                    "a",
                    "Flag the discrepancy to the data or quality lead. Accurate numbers protect funding for the people you serve.",
                    "Señalar la discrepancia al responsable de datos o calidad. Las cifras exactas protegen el financiamiento para las personas que atiendes.",
                    &[(Mission, 10), (Execution, 3)],
                ),
                option(
                    "b",
                    "Double-check your own impressions before saying anything.",
                    "Verificar tus propias impresiones antes de decir algo.",
                    &[(Mission, 6)],
                ),
                option(
                    "c",
                    "Assume the reporting team knows best.",
                    "Suponer que el equipo de informes sabe más.",
                    &[(Mission, 2)],
                ),
                option(
                    "d",
                    "Let it go; reports are not part of your job.",
                    "Dejarlo pasar; los informes no son parte de tu trabajo.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "people_1",
            People,
            Universal,
            text(
                "A patient becomes upset in the waiting room and raises their voice about a billing error.",
                "Un paciente se molesta en la sala de espera y levanta la voz por un error de facturación.",
            ),
            text("How do you handle it?", "¿Cómo lo manejas?"),
            vec![
                option(
                    "a",
                    "Acknowledge their frustration calmly, move the conversation somewhere private, and walk them to someone who can fix the bill.",
                    "Reconocer su frustración con calma, llevar la conversación a un lugar privado y acompañarlo con alguien que pueda corregir la factura.",
                    &[(People, 10), (Mission, 2)],
                ),
                option(
                    "b",
                    "Explain the billing process so they understand why it happened.",
                    "Explicar el proceso de facturación para que entienda por qué ocurrió.",
                    &[(People, 5)],
                ),
                option(
                    "c",
                    "Ask them to lower their voice or they will be asked to leave.",
                    "Pedirle que baje la voz o tendrá que retirarse.",
                    &[(People, 2)],
                ),
                option(
                    "d",
                    "Call security right away.",
                    "Llamar a seguridad de inmediato.",
                    &[(People, 1)],
                ),
            ],
        ),
        question(
            "people_2",
            People,
            Universal,
            text(
                "A coworker in another department keeps missing handoffs that affect your patients.",
                "Un compañero de otro departamento sigue fallando en las entregas de información que afectan a tus pacientes.",
            ),
            text("What do you do first?", "¿Qué haces primero?"),
            vec![
                option(
                    "a",
                    "Talk with them privately to understand what gets in the way, then agree on a simple handoff check.",
                    "Hablar en privado para entender qué se lo impide y luego acordar una verificación sencilla de entregas.",
                    &[(People, 10), (Execution, 3)],
                ),
                option(
                    "b",
                    "Report the issue to your supervisor.",
                    "Informar el problema a tu supervisor.",
                    &[(People, 5)],
                ),
                option(
                    "c",
                    "Quietly cover the gaps yourself.",
                    "Cubrir las fallas tú mismo sin decir nada.",
                    &[(People, 3), (Execution, 1)],
                ),
                option(
                    "d",
                    "Vent about it with other coworkers.",
                    "Desahogarte con otros compañeros.",
                    &[(People, 1)],
                ),
            ],
        ),
        question(
            "people_3",
            People,
            Universal,
            text(
                "A patient with limited English is struggling to understand their discharge instructions.",
                "Un paciente con inglés limitado tiene dificultades para entender sus instrucciones de alta.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Bring in a qualified interpreter and use teach-back to confirm they understood.",
                    "Solicitar un intérprete calificado y usar el método de repetir lo aprendido para confirmar que entendió.",
                    &[(People, 10), (Mission, 3)],
                ),
                option(
                    "b",
                    "Speak slowly and use simple words.",
                    "Hablar despacio y usar palabras sencillas.",
                    &[(People, 5)],
                ),
                option(
                    "c",
                    "Ask the family member with them to translate.",
                    "Pedir al familiar que lo acompaña que traduzca.",
                    &[(People, 3)],
                ),
                option(
                    "d",
                    "Hand them the printed instructions and move on.",
                    "Entregarle las instrucciones impresas y continuar.",
                    &[(People, 1)],
                ),
            ],
        ),
        question(
            "execution_1",
            Execution,
            Universal,
            text(
                "It is Monday morning and you have more work than time: charting, patient callbacks, a team meeting, and a report.",
                "Es lunes por la mañana y tienes más trabajo que tiempo: notas clínicas, llamadas a pacientes, una reunión de equipo y un informe.",
            ),
            text("How do you approach the day?", "¿Cómo organizas el día?"),
            vec![
                option(
                    "a",
                    "Prioritize by patient impact and deadlines, block time for each task, and tell your lead early what might slip.",
                    "Priorizar según el impacto en los pacientes y los plazos, reservar tiempo para cada tarea y avisar temprano a tu líder sobre lo que podría retrasarse.",
                    &[(Execution, 10), (People, 2)],
                ),
                option(
                    "b",
                    "Start with the quickest tasks to build momentum.",
                    "Empezar por las tareas más rápidas para tomar impulso.",
                    &[(Execution, 5)],
                ),
                option(
                    "c",
                    "Stay late every day until everything is done.",
                    "Quedarte tarde todos los días hasta terminar todo.",
                    &[(Execution, 3)],
                ),
                option(
                    "d",
                    "Work on whatever comes up first.",
                    "Atender lo que surja primero.",
                    &[(Execution, 2)],
                ),
            ],
        ),
        question(
            "execution_2",
            Execution,
            Universal,
            text(
                "You notice a recurring error in how referrals are logged in the electronic health record.",
                "Notas un error recurrente en la forma en que se registran las referencias en el expediente clínico electrónico.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Document the pattern, suggest a fix to the workflow owner, and follow up until it is resolved.",
                    "Documentar el patrón, proponer una solución al responsable del proceso y dar seguimiento hasta que se resuelva.",
                    &[(Execution, 10), (Growth, 3)],
                ),
                option(
                    "b",
                    "Fix the errors you find without telling anyone.",
                    "Corregir los errores que encuentres sin avisar a nadie.",
                    &[(Execution, 5)],
                ),
                option(
                    "c",
                    "Mention it at the next team meeting if there is time.",
                    "Mencionarlo en la próxima reunión de equipo si hay tiempo.",
                    &[(Execution, 3)],
                ),
                option(
                    "d",
                    "Assume someone else already noticed.",
                    "Suponer que alguien más ya lo notó.",
                    &[(Execution, 1)],
                ),
            ],
        ),
        question(
            "execution_3",
            Execution,
            Universal,
            text(
                "Your clinic is preparing for an accreditation site visit in two weeks.",
                "Tu clínica se prepara para una visita de acreditación dentro de dos semanas.",
            ),
            text("What role do you take?", "¿Qué papel asumes?"),
            vec![
                option(
                    "a",
                    "Volunteer to own a checklist section, track open items, and report progress to the team.",
                    "Ofrecerte para encargarte de una sección de la lista de verificación, dar seguimiento a los pendientes e informar el avance al equipo.",
                    &[(Execution, 10), (Mission, 2)],
                ),
                option(
                    "b",
                    "Make sure your own area is in order.",
                    "Asegurarte de que tu área esté en orden.",
                    &[(Execution, 6)],
                ),
                option(
                    "c",
                    "Wait to be told what to do.",
                    "Esperar a que te digan qué hacer.",
                    &[(Execution, 2)],
                ),
                option(
                    "d",
                    "Focus on patients and let leadership handle it.",
                    "Concentrarte en los pacientes y dejar que la dirección se encargue.",
                    &[(Execution, 1), (Mission, 1)],
                ),
            ],
        ),
        question(
            "growth_1",
            Growth,
            Universal,
            text(
                "Your supervisor tells you that your documentation is often incomplete.",
                "Tu supervisor te dice que tu documentación con frecuencia está incompleta.",
            ),
            text("How do you respond?", "¿Cómo respondes?"),
            vec![
                option(
                    "a",
                    "Thank them, ask for an example of complete documentation, and set a check-in to review your progress.",
                    "Agradecer, pedir un ejemplo de documentación completa y programar una revisión de tu progreso.",
                    &[(Growth, 10), (Execution, 2)],
                ),
                option(
                    "b",
                    "Accept the feedback and try to do better.",
                    "Aceptar la retroalimentación e intentar mejorar.",
                    &[(Growth, 6)],
                ),
                option(
                    "c",
                    "Explain why you have not had time to document fully.",
                    "Explicar por qué no has tenido tiempo de documentar por completo.",
                    &[(Growth, 2)],
                ),
                option(
                    "d",
                    "Feel discouraged and avoid the topic.",
                    "Desanimarte y evitar el tema.",
                    &[(Growth, 1)],
                ),
            ],
        ),
        question(
            "growth_2",
            Growth,
            Universal,
            text(
                "The health center is switching to a new patient portal and offers optional training.",
                "El centro de salud está cambiando a un nuevo portal para pacientes y ofrece una capacitación opcional.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Attend the training, practice with the system, and offer to help coworkers who are struggling.",
                    "Asistir a la capacitación, practicar con el sistema y ofrecer ayuda a los compañeros que tengan dificultades.",
                    &[(Growth, 10), (People, 3)],
                ),
                option(
                    "b",
                    "Attend the training when your schedule allows.",
                    "Asistir a la capacitación cuando tu horario lo permita.",
                    &[(Growth, 6)],
                ),
                option(
                    "c",
                    "Learn it on the job when you have to.",
                    "Aprenderlo sobre la marcha cuando sea necesario.",
                    &[(Growth, 3)],
                ),
                option(
                    "d",
                    "Keep using the old workarounds as long as possible.",
                    "Seguir usando los métodos anteriores el mayor tiempo posible.",
                    &[(Growth, 1)],
                ),
            ],
        ),
        question(
            "growth_3",
            Growth,
            Universal,
            text(
                "A certification that would expand your role is offered, but the course runs in the evenings for three months.",
                "Se ofrece una certificación que ampliaría tu puesto, pero el curso es por las tardes durante tres meses.",
            ),
            text("What do you decide?", "¿Qué decides?"),
            vec![
                option(
                    "a",
                    "Plan with your family and supervisor to complete it, and ask whether the center offers tuition support.",
                    "Planificar con tu familia y tu supervisor para completarla y preguntar si el centro ofrece apoyo para la colegiatura.",
                    &[(Growth, 10), (Transition, 3)],
                ),
                option(
                    "b",
                    "Sign up and figure out the schedule as you go.",
                    "Inscribirte y resolver el horario sobre la marcha.",
                    &[(Growth, 6)],
                ),
                option(
                    "c",
                    "Wait for a more convenient time.",
                    "Esperar un momento más conveniente.",
                    &[(Growth, 3)],
                ),
                option(
                    "d",
                    "Decide it is not worth the effort.",
                    "Decidir que no vale la pena el esfuerzo.",
                    &[(Growth, 1)],
                ),
            ],
        ),
        question(
            "transition_1",
            Transition,
            Universal,
            text(
                "You are moving from a hospital job into a community health center role.",
                "Estás pasando de un empleo en un hospital a un puesto en un centro de salud comunitario.",
            ),
            text("How do you prepare?", "¿Cómo te preparas?"),
            vec![
                option(
                    "a",
                    "Research the center's patients and programs such as the sliding-fee scale, and ask a current employee what a typical day looks like.",
                    "Investigar a los pacientes y programas del centro, como la escala de tarifas variables, y preguntar a un empleado actual cómo es un día típico.",
                    &[(Transition, 10), (Mission, 2)],
                ),
                option(
                    "b",
                    "Read the job description carefully.",
                    "Leer con atención la descripción del puesto.",
                    &[(Transition, 5)],
                ),
                option(
                    "c",
                    "Rely on your hospital experience; patient care is patient care.",
                    "Confiar en tu experiencia hospitalaria; la atención al paciente es la misma.",
                    &[(Transition, 3)],
                ),
                option(
                    "d",
                    "Wait for onboarding to learn the differences.",
                    "Esperar a la inducción para conocer las diferencias.",
                    &[(Transition, 2)],
                ),
            ],
        ),
        question(
            "transition_2",
            Transition,
            Universal,
            text(
                "An interviewer asks how your past experience applies to working at a community health center.",
                "Un entrevistador te pregunta cómo se aplica tu experiencia previa al trabajo en un centro de salud comunitario.",
            ),
            text("How do you answer?", "¿Cómo respondes?"),
            vec![
                option(
                    "a",
                    "Connect specific examples from past work to the center's mission, patients, and team-based care model.",
                    "Relacionar ejemplos concretos de tu trabajo anterior con la misión, los pacientes y el modelo de atención en equipo del centro.",
                    &[(Transition, 10), (Mission, 3)],
                ),
                option(
                    "b",
                    "List your previous job duties.",
                    "Enumerar tus funciones anteriores.",
                    &[(Transition, 4)],
                ),
                option(
                    "c",
                    "Say you are a fast learner and will figure it out.",
                    "Decir que aprendes rápido y que lo resolverás.",
                    &[(Transition, 3)],
                ),
                option(
                    "d",
                    "Focus on salary and schedule expectations.",
                    "Enfocarte en tus expectativas de salario y horario.",
                    &[(Transition, 1)],
                ),
            ],
        ),
        question(
            "transition_3",
            Transition,
            Universal,
            text(
                "Your resume lists tasks but not results, and you are applying for a new role next week.",
                "Tu currículum enumera tareas pero no resultados, y solicitarás un nuevo puesto la próxima semana.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Rewrite each bullet to show impact, such as patients served or wait times reduced, and ask a mentor to review it.",
                    "Reescribir cada punto para mostrar impacto, como pacientes atendidos o tiempos de espera reducidos, y pedir a un mentor que lo revise.",
                    &[(Transition, 10), (Growth, 2)],
                ),
                option(
                    "b",
                    "Add a few more tasks you have done.",
                    "Agregar algunas tareas más que hayas realizado.",
                    &[(Transition, 4)],
                ),
                option(
                    "c",
                    "Use an online template and submit it as-is.",
                    "Usar una plantilla en línea y enviarlo tal cual.",
                    &[(Transition, 3)],
                ),
                option(
                    "d",
                    "Submit the current version; experience speaks for itself.",
                    "Enviar la versión actual; la experiencia habla por sí sola.",
                    &[(Transition, 1)],
                ),
            ],
        ),
    ]
}

fn role_questions() -> Vec<AssessmentQuestion> {
    use Domain::*;
    use QuestionScope::Role;

    vec![
        question(
            "chw_1",
            People,
            Role,
            text(
                "A family you visit at home has missed several appointments and has an unpaid utility bill.",
                "Una familia que visitas en casa ha faltado a varias citas y tiene una factura de servicios sin pagar.",
            ),
            text("What do you focus on?", "¿En qué te enfocas?"),
            vec![
                option(
                    "a",
                    "Ask open questions about what gets in the way, connect them with utility assistance, and help book a visit that fits their week.",
                    "Hacer preguntas abiertas sobre lo que les impide asistir, conectarlos con ayuda para servicios y agendar una cita que se ajuste a su semana.",
                    &[(People, 10), (Mission, 3)],
                ),
                option(
                    "b",
                    "Give them a list of community resources.",
                    "Darles una lista de recursos comunitarios.",
                    &[(People, 5)],
                ),
                option(
                    "c",
                    "Remind them how important appointments are.",
                    "Recordarles lo importantes que son las citas.",
                    &[(People, 4)],
                ),
                option(
                    "d",
                    "Note the missed appointments in the record.",
                    "Anotar las citas perdidas en el expediente.",
                    &[(People, 1)],
                ),
            ],
        ),
        question(
            "chw_2",
            Mission,
            Role,
            text(
                "A community organizer asks you to promote the clinic's services at a Saturday health fair.",
                "Un organizador comunitario te pide promover los servicios de la clínica en una feria de salud un sábado.",
            ),
            text("How do you respond?", "¿Cómo respondes?"),
            vec![
                option(
                    "a",
                    "Help plan the outreach, bring bilingual materials, and track how many people you connect to care.",
                    "Ayudar a planear la difusión, llevar materiales bilingües y registrar cuántas personas conectas con la atención.",
                    &[(Mission, 10), (Execution, 3)],
                ),
                option(
                    "b",
                    "Attend if you are available.",
                    "Asistir si estás disponible.",
                    &[(Mission, 5)],
                ),
                option(
                    "c",
                    "Send flyers for others to hand out.",
                    "Enviar volantes para que otros los repartan.",
                    &[(Mission, 3)],
                ),
                option(
                    "d",
                    "Decline because it is outside your normal hours.",
                    "Rechazarlo porque es fuera de tu horario normal.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "ma_1",
            Execution,
            Role,
            text(
                "The provider is running 40 minutes behind and patients are stacking up in exam rooms.",
                "El proveedor lleva 40 minutos de retraso y los pacientes se acumulan en los consultorios.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Update waiting patients, complete intake for the next patients, and let the front desk know so they can adjust.",
                    "Informar a los pacientes que esperan, completar la admisión de los siguientes y avisar a recepción para que se ajuste.",
                    &[(Execution, 10), (People, 3)],
                ),
                option(
                    "b",
                    "Keep rooming patients on schedule.",
                    "Seguir pasando pacientes a consultorio según la agenda.",
                    &[(Execution, 5)],
                ),
                option(
                    "c",
                    "Ask patients whether they want to reschedule.",
                    "Preguntar a los pacientes si desean reprogramar.",
                    &[(Execution, 3), (People, 1)],
                ),
                option(
                    "d",
                    "Wait for the provider to catch up.",
                    "Esperar a que el proveedor se ponga al día.",
                    &[(Execution, 2)],
                ),
            ],
        ),
        question(
            "ma_2",
            Growth,
            Role,
            text(
                "Your clinic is launching a diabetes screening protocol that medical assistants will help run.",
                "Tu clínica inicia un protocolo de detección de diabetes que los asistentes médicos ayudarán a aplicar.",
            ),
            text("How do you get involved?", "¿Cómo participas?"),
            vec![
                option(
                    "a",
                    "Learn the protocol, ask to be trained as a super-user, and share tips with the team.",
                    "Aprender el protocolo, pedir capacitación como usuario experto y compartir consejos con el equipo.",
                    &[(Growth, 10), (Execution, 2)],
                ),
                option(
                    "b",
                    "Follow the protocol once it is rolled out.",
                    "Seguir el protocolo una vez que se implemente.",
                    &[(Growth, 5)],
                ),
                option(
                    "c",
                    "Ask a coworker to explain it when needed.",
                    "Pedir a un compañero que te lo explique cuando sea necesario.",
                    &[(Growth, 3)],
                ),
                option(
                    "d",
                    "Worry that it adds too much to your workload.",
                    "Preocuparte de que añada demasiado a tu carga de trabajo.",
                    &[(Growth, 1)],
                ),
            ],
        ),
        question(
            "rn_1",
            People,
            Role,
            text(
                "A care team member disagrees with your triage decision in front of a patient.",
                "Un miembro del equipo de atención no está de acuerdo con tu decisión de triaje frente a un paciente.",
            ),
            text("How do you handle it?", "¿Cómo lo manejas?"),
            vec![
                option(
                    "a",
                    "Reassure the patient, then step aside with your colleague to review the triage criteria together.",
                    "Tranquilizar al paciente y luego apartarte con tu colega para revisar juntos los criterios de triaje.",
                    &[(People, 10), (Execution, 2)],
                ),
                option(
                    "b",
                    "Raise it with the nurse manager later.",
                    "Comentarlo después con la jefa de enfermería.",
                    &[(People, 5)],
                ),
                option(
                    "c",
                    "Defer to your colleague to avoid conflict.",
                    "Ceder ante tu colega para evitar conflictos.",
                    &[(People, 4)],
                ),
                option(
                    "d",
                    "Defend your decision on the spot.",
                    "Defender tu decisión en ese momento.",
                    &[(People, 3)],
                ),
            ],
        ),
        question(
            "rn_2",
            Mission,
            Role,
            text(
                "An uninsured patient needs a follow-up test the clinic cannot provide.",
                "Un paciente sin seguro necesita un estudio de seguimiento que la clínica no puede realizar.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Work with the care coordinator to find a sliding-fee or charity option and confirm the patient can get there.",
                    "Trabajar con el coordinador de atención para encontrar una opción con tarifa variable o de beneficencia y confirmar que el paciente pueda llegar.",
                    &[(Mission, 10), (People, 3)],
                ),
                option(
                    "b",
                    "Give the patient the name of a lab.",
                    "Darle al paciente el nombre de un laboratorio.",
                    &[(Mission, 4)],
                ),
                option(
                    "c",
                    "Document the need and leave the rest to the patient.",
                    "Documentar la necesidad y dejar el resto al paciente.",
                    &[(Mission, 2)],
                ),
                option(
                    "d",
                    "Tell the patient to come back once they have coverage.",
                    "Decirle al paciente que regrese cuando tenga cobertura.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "bh_1",
            People,
            Role,
            text(
                "Near the end of a brief integrated care visit, a patient discloses thoughts of self-harm.",
                "Al final de una consulta breve de atención integrada, un paciente revela pensamientos de autolesión.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Stay with the patient, complete a risk assessment, and coordinate a warm handoff and safety plan with the care team.",
                    "Quedarte con el paciente, completar una evaluación de riesgo y coordinar una transferencia directa y un plan de seguridad con el equipo.",
                    &[(People, 10), (Mission, 3)],
                ),
                option(
                    "b",
                    "Let the primary care provider know after the visit.",
                    "Avisar al proveedor de atención primaria después de la consulta.",
                    &[(People, 4)],
                ),
                option(
                    "c",
                    "Schedule a longer follow-up later this week.",
                    "Programar una consulta de seguimiento más larga esta semana.",
                    &[(People, 3)],
                ),
                option(
                    "d",
                    "Give the patient a crisis hotline number.",
                    "Darle al paciente el número de una línea de crisis.",
                    &[(People, 2)],
                ),
            ],
        ),
        question(
            "bh_2",
            Growth,
            Role,
            text(
                "Your caseload keeps growing and you notice signs of burnout in yourself.",
                "Tu número de casos sigue creciendo y notas señales de agotamiento en ti.",
            ),
            text("How do you respond?", "¿Cómo respondes?"),
            vec![
                option(
                    "a",
                    "Bring it to supervision, adjust your schedule with your lead, and build in recovery practices.",
                    "Llevarlo a supervisión, ajustar tu horario con tu líder e incorporar prácticas de recuperación.",
                    &[(Growth, 10), (Transition, 2)],
                ),
                option(
                    "b",
                    "Take a day off when it gets too hard.",
                    "Tomar un día libre cuando sea demasiado.",
                    &[(Growth, 4)],
                ),
                option(
                    "c",
                    "Push through until things slow down.",
                    "Aguantar hasta que las cosas se calmen.",
                    &[(Growth, 2)],
                ),
                option(
                    "d",
                    "Keep it to yourself.",
                    "Guardártelo.",
                    &[(Growth, 1)],
                ),
            ],
        ),
        question(
            "psr_1",
            Execution,
            Role,
            text(
                "Twelve callers are waiting in the phone queue and a line is forming at check-in.",
                "Hay doce personas esperando en la línea telefónica y se forma una fila en el registro.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Alert your lead, triage urgent callers, and use scripts to move check-ins quickly without skipping eligibility steps.",
                    "Avisar a tu líder, priorizar las llamadas urgentes y usar guiones para agilizar el registro sin omitir la verificación de elegibilidad.",
                    &[(Execution, 10), (People, 2)],
                ),
                option(
                    "b",
                    "Handle the line first, then the phones.",
                    "Atender primero la fila y luego los teléfonos.",
                    &[(Execution, 5)],
                ),
                option(
                    "c",
                    "Leave callers on hold longer.",
                    "Dejar a las personas en espera por más tiempo.",
                    &[(Execution, 2)],
                ),
                option(
                    "d",
                    "Skip insurance verification to move faster.",
                    "Omitir la verificación del seguro para avanzar más rápido.",
                    &[(Execution, 1)],
                ),
            ],
        ),
        question(
            "psr_2",
            Mission,
            Role,
            text(
                "A patient says they cannot afford the visit and is about to leave.",
                "Un paciente dice que no puede pagar la consulta y está a punto de irse.",
            ),
            text("What do you do?", "¿Qué haces?"),
            vec![
                option(
                    "a",
                    "Explain the sliding-fee discount, help start the application, and keep the visit on track.",
                    "Explicar el descuento por tarifa variable, ayudar a iniciar la solicitud y mantener la consulta.",
                    &[(Mission, 10), (People, 3)],
                ),
                option(
                    "b",
                    "Tell them about the payment plan.",
                    "Informarle sobre el plan de pagos.",
                    &[(Mission, 5)],
                ),
                option(
                    "c",
                    "Give them the billing office phone number.",
                    "Darle el teléfono de la oficina de facturación.",
                    &[(Mission, 3)],
                ),
                option(
                    "d",
                    "Let them leave and reschedule.",
                    "Dejar que se vaya y reprogramar.",
                    &[(Mission, 1)],
                ),
            ],
        ),
        question(
            "cc_1",
            Execution,
            Role,
            text(
                "A high-risk patient has five open referrals across three specialists.",
                "Un paciente de alto riesgo tiene cinco referencias abiertas con tres especialistas.",
            ),
            text("How do you manage them?", "¿Cómo las gestionas?"),
            vec![
                option(
                    "a",
                    "Build a tracking list, confirm each appointment, and close the loop with the primary care team.",
                    "Crear una lista de seguimiento, confirmar cada cita y cerrar el ciclo con el equipo de atención primaria.",
                    &[(Execution, 10), (Mission, 2)],
                ),
                option(
                    "b",
                    "Follow up only on the most urgent referral.",
                    "Dar seguimiento solo a la referencia más urgente.",
                    &[(Execution, 5)],
                ),
                option(
                    "c",
                    "Send the referrals and trust the specialists to follow up.",
                    "Enviar las referencias y confiar en que los especialistas den seguimiento.",
                    &[(Execution, 3)],
                ),
                option(
                    "d",
                    "Ask the patient to keep track of them.",
                    "Pedir al paciente que les dé seguimiento.",
                    &[(Execution, 1)],
                ),
            ],
        ),
        question(
            "cc_2",
            Transition,
            Role,
            text(
                "You are asked to cover a coworker's patient panel while they are on leave.",
                "Te piden cubrir el panel de pacientes de un compañero mientras está de licencia.",
            ),
            text("How do you take it on?", "¿Cómo lo asumes?"),
            vec![
                option(
                    "a",
                    "Meet with them before they leave, review each patient's plan, and prepare a handoff note for their return.",
                    "Reunirte antes de que se vaya, revisar el plan de cada paciente y preparar una nota de entrega para su regreso.",
                    &[(Transition, 10), (People, 2)],
                ),
                option(
                    "b",
                    "Review charts as patients come up.",
                    "Revisar los expedientes conforme se presenten los pacientes.",
                    &[(Transition, 5)],
                ),
                option(
                    "c",
                    "Handle only urgent issues until they return.",
                    "Atender solo los asuntos urgentes hasta su regreso.",
                    &[(Transition, 3)],
                ),
                option(
                    "d",
                    "Say your own panel is already too full.",
                    "Decir que tu propio panel ya está demasiado lleno.",
                    &[(Transition, 1)],
                ),
            ],
        ),
    ]
}
