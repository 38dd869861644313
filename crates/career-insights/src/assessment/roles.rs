use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::domain::{
    CatalogError, EmployerWants, LocalizedText, Locale, QuestionScope, RoleInsight,
};

/// What employers hiring for a role look for, in both languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub qualifications: Vec<LocalizedText>,
    pub skills: Vec<LocalizedText>,
    pub certifications: Vec<LocalizedText>,
}

impl RoleRequirements {
    pub fn localize(&self, locale: Locale) -> EmployerWants {
        let resolve = |items: &[LocalizedText]| {
            items
                .iter()
                .map(|item| item.resolve(locale).to_string())
                .collect()
        };

        EmployerWants {
            qualifications: resolve(&self.qualifications),
            skills: resolve(&self.skills),
            certifications: resolve(&self.certifications),
        }
    }
}

/// Role template: extra scenarios plus employer expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub questions: Vec<String>,
    pub employer_wants: RoleRequirements,
    /// Key for the external salary benchmark lookup (SOC occupation code).
    pub benchmark_key: String,
}

impl RoleProfile {
    pub fn insight(&self, locale: Locale) -> RoleInsight {
        RoleInsight {
            role_id: self.id.clone(),
            title: self.title.resolve(locale).to_string(),
            employer_wants: self.employer_wants.localize(locale),
            benchmark_key: self.benchmark_key.clone(),
        }
    }
}

/// Summary row for role pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn standard() -> Self {
        Self {
            roles: standard_roles(),
        }
    }

    pub fn new(roles: Vec<RoleProfile>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Unknown or absent roles resolve to `None`; ids match case-insensitively.
    pub fn resolve(&self, role_id: Option<&str>) -> Option<&RoleProfile> {
        let wanted = role_id?.trim();
        if wanted.is_empty() {
            return None;
        }
        self.roles
            .iter()
            .find(|role| role.id.eq_ignore_ascii_case(wanted))
    }

    pub fn validate(&self, bank: &QuestionBank) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for role in &self.roles {
            if !seen.insert(role.id.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateRole(role.id.clone()));
            }
            for question_id in &role.questions {
                match bank.get(question_id) {
                    None => {
                        return Err(CatalogError::UnknownRoleQuestion {
                            role_id: role.id.clone(),
                            question_id: question_id.clone(),
                        })
                    }
                    Some(question) if question.scope == QuestionScope::Universal => {
                        return Err(CatalogError::UniversalQuestionInRole {
                            role_id: role.id.clone(),
                            question_id: question_id.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

fn text(en: &str, es: &str) -> LocalizedText {
    LocalizedText::new(en, es)
}

fn role(
    id: &str,
    title: LocalizedText,
    questions: &[&str],
    employer_wants: RoleRequirements,
    benchmark_key: &str,
) -> RoleProfile {
    RoleProfile {
        id: id.to_string(),
        title,
        questions: questions.iter().map(|id| id.to_string()).collect(),
        employer_wants,
        benchmark_key: benchmark_key.to_string(),
    }
}

fn standard_roles() -> Vec<RoleProfile> {
    vec![
        role(
            "community_health_worker",
            text("Community Health Worker", "Promotor(a) de Salud Comunitaria"),
            &["chw_1", "chw_2"],
            RoleRequirements {
                qualifications: vec![
                    text("High school diploma or GED", "Diploma de preparatoria o GED"),
                    text(
                        "Lived experience in the community served",
                        "Experiencia de vida en la comunidad atendida",
                    ),
                ],
                skills: vec![
                    text(
                        "Bilingual English/Spanish communication",
                        "Comunicación bilingüe inglés/español",
                    ),
                    text("Motivational interviewing", "Entrevista motivacional"),
                    text(
                        "Resource navigation and referrals",
                        "Navegación de recursos y referencias",
                    ),
                ],
                certifications: vec![
                    text(
                        "State CHW certification",
                        "Certificación estatal de promotor(a) de salud",
                    ),
                    text("CPR/First Aid", "RCP/Primeros auxilios"),
                ],
            },
            "soc-21-1094",
        ),
        role(
            "medical_assistant",
            text("Medical Assistant", "Asistente Médico"),
            &["ma_1", "ma_2"],
            RoleRequirements {
                qualifications: vec![
                    text(
                        "Completion of an accredited medical assistant program",
                        "Programa acreditado de asistente médico concluido",
                    ),
                    text("One year of clinic experience", "Un año de experiencia en clínica"),
                ],
                skills: vec![
                    text(
                        "Vital signs and patient intake",
                        "Signos vitales y admisión de pacientes",
                    ),
                    text(
                        "Electronic health record documentation",
                        "Documentación en expediente clínico electrónico",
                    ),
                    text("Immunization administration", "Aplicación de vacunas"),
                ],
                certifications: vec![
                    text("CMA or RMA", "CMA o RMA"),
                    text("Basic Life Support (BLS)", "Soporte Vital Básico (BLS)"),
                ],
            },
            "soc-31-9092",
        ),
        role(
            "registered_nurse",
            text("Registered Nurse", "Enfermero(a) Registrado(a)"),
            &["rn_1", "rn_2"],
            RoleRequirements {
                qualifications: vec![
                    text("ADN or BSN degree", "Título ADN o BSN"),
                    text(
                        "Ambulatory or primary care experience",
                        "Experiencia en atención ambulatoria o primaria",
                    ),
                ],
                skills: vec![
                    text("Telephone and walk-in triage", "Triaje telefónico y presencial"),
                    text("Chronic disease care management", "Manejo de enfermedades crónicas"),
                    text(
                        "Patient education with teach-back",
                        "Educación al paciente con repetición de lo aprendido",
                    ),
                ],
                certifications: vec![
                    text("Active RN license", "Licencia de enfermería vigente"),
                    text("Basic Life Support (BLS)", "Soporte Vital Básico (BLS)"),
                ],
            },
            "soc-29-1141",
        ),
        role(
            "behavioral_health_specialist",
            text("Behavioral Health Specialist", "Especialista en Salud Conductual"),
            &["bh_1", "bh_2"],
            RoleRequirements {
                qualifications: vec![
                    text(
                        "Master's degree in social work, counseling, or psychology",
                        "Maestría en trabajo social, consejería o psicología",
                    ),
                    text(
                        "Experience in integrated primary care",
                        "Experiencia en atención primaria integrada",
                    ),
                ],
                skills: vec![
                    text(
                        "Brief solution-focused interventions",
                        "Intervenciones breves centradas en soluciones",
                    ),
                    text("Suicide risk assessment", "Evaluación de riesgo suicida"),
                    text("Trauma-informed care", "Atención informada sobre el trauma"),
                ],
                certifications: vec![
                    text("LCSW, LPC, or LMFT license", "Licencia LCSW, LPC o LMFT"),
                ],
            },
            "soc-21-1018",
        ),
        role(
            "patient_services_representative",
            text("Patient Services Representative", "Representante de Servicios al Paciente"),
            &["psr_1", "psr_2"],
            RoleRequirements {
                qualifications: vec![
                    text("High school diploma or GED", "Diploma de preparatoria o GED"),
                    text(
                        "Customer service experience in a healthcare setting",
                        "Experiencia en servicio al cliente en un entorno de salud",
                    ),
                ],
                skills: vec![
                    text(
                        "Insurance eligibility verification",
                        "Verificación de elegibilidad de seguros",
                    ),
                    text(
                        "Sliding-fee scale enrollment",
                        "Inscripción en la escala de tarifas variables",
                    ),
                    text(
                        "Scheduling and phone etiquette",
                        "Programación de citas y atención telefónica",
                    ),
                ],
                certifications: vec![text(
                    "Certified Patient Access Associate (optional)",
                    "Certificación en Acceso de Pacientes (opcional)",
                )],
            },
            "soc-43-4171",
        ),
        role(
            "care_coordinator",
            text("Care Coordinator", "Coordinador(a) de Atención"),
            &["cc_1", "cc_2"],
            RoleRequirements {
                qualifications: vec![
                    text(
                        "Associate or bachelor's degree in a health or social services field",
                        "Título técnico o licenciatura en salud o servicios sociales",
                    ),
                    text(
                        "Experience managing referrals or case loads",
                        "Experiencia en gestión de referencias o casos",
                    ),
                ],
                skills: vec![
                    text(
                        "Referral tracking and closed-loop follow-up",
                        "Seguimiento de referencias con cierre de ciclo",
                    ),
                    text("Care plan documentation", "Documentación de planes de atención"),
                    text("Cross-team communication", "Comunicación entre equipos"),
                ],
                certifications: vec![text(
                    "Care coordination or case management certificate",
                    "Certificado en coordinación de atención o manejo de casos",
                )],
            },
            "soc-21-1022",
        ),
    ]
}
