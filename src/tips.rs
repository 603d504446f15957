use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Espera máxima por una generación; pasado este plazo la petición se da
/// por perdida y se informa del fallo genérico.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Longitud máxima del panorama de amenazas que admite el formulario.
pub const MAX_THREATS_LEN: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Worker,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Worker => "Empleado",
            Role::Admin => "Administrador",
        }
    }

    fn for_prompt(&self) -> &'static str {
        match self {
            Role::Worker => "un empleado sin privilegios especiales",
            Role::Admin => "un administrador de sistemas",
        }
    }
}

/// Petición validada: rol elegido y un panorama de amenazas de 1 a 500
/// caracteres.
#[derive(Debug, Clone)]
pub struct TipsRequest {
    pub role: Role,
    pub current_threats: String,
}

impl TipsRequest {
    pub fn new(role: Role, current_threats: String) -> Result<Self, TipsError> {
        let trimmed = current_threats.trim();
        if trimmed.is_empty() {
            return Err(TipsError::EmptyThreats);
        }
        let chars = trimmed.chars().count();
        if chars > MAX_THREATS_LEN {
            return Err(TipsError::ThreatsTooLong(chars));
        }
        Ok(Self {
            role,
            current_threats: trimmed.to_owned(),
        })
    }
}

#[derive(Debug)]
pub enum TipsError {
    EmptyThreats,
    ThreatsTooLong(usize),
    MissingApiKey,
    Http(String),
    InvalidResponse(String),
    NoTips,
}

impl fmt::Display for TipsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipsError::EmptyThreats => write!(f, "Por favor describe las amenazas actuales."),
            TipsError::ThreatsTooLong(n) => {
                write!(f, "La descripción es demasiado larga ({n}/{MAX_THREATS_LEN}).")
            }
            TipsError::MissingApiKey => {
                write!(f, "Falta la clave de API del servicio de consejos")
            }
            TipsError::Http(msg) => write!(f, "Error conectando con el servicio de consejos: {msg}"),
            TipsError::InvalidResponse(msg) => {
                write!(f, "Respuesta inválida del servicio de consejos: {msg}")
            }
            TipsError::NoTips => write!(f, "El servicio no devolvió ningún consejo"),
        }
    }
}

impl std::error::Error for TipsError {}

// Cuerpo mínimo de una llamada de chat-completions y de su respuesta.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

fn default_endpoint() -> String {
    std::env::var("CYBERSAFE_TIPS_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

fn model_name() -> String {
    std::env::var("CYBERSAFE_TIPS_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

fn api_key() -> Result<String, TipsError> {
    std::env::var("CYBERSAFE_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|s| !s.trim().is_empty())
        .ok_or(TipsError::MissingApiKey)
}

pub fn build_prompt(request: &TipsRequest) -> String {
    format!(
        "Eres un experto en ciberseguridad. Genera una lista de consejos de \
         ciberseguridad personalizados para {}, teniendo en cuenta el panorama \
         de amenazas actual.\n\
         Panorama de amenazas: {}\n\
         Responde en español, con un consejo por línea y sin numeración.",
        request.role.for_prompt(),
        request.current_threats
    )
}

/// Trocea la respuesta del modelo en consejos: una línea por consejo,
/// quitando viñetas y numeración si el modelo las añade igualmente.
pub fn parse_tips(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim().trim_start_matches(['-', '*', '•']).trim_start();
    let sin_numero = line.trim_start_matches(|c: char| c.is_ascii_digit());
    // "2. Consejo" es numeración; "2FA es..." no lo es
    if sin_numero.len() < line.len() && sin_numero.starts_with(['.', ')']) {
        sin_numero[1..].trim_start()
    } else {
        line
    }
}

/// Pide una tanda de consejos al servicio. Llamada bloqueante: el llamante
/// decide en qué hilo la ejecuta.
pub fn generate_tips(request: &TipsRequest) -> Result<Vec<String>, TipsError> {
    let api_key = api_key()?;
    let endpoint = default_endpoint();
    let prompt = build_prompt(request);
    let model = model_name();

    log::debug!("Pidiendo consejos a {endpoint} (rol {:?})", request.role);

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| TipsError::Http(e.to_string()))?;

    let payload = ChatRequest {
        model: &model,
        messages: vec![ChatMessage {
            role: "user",
            content: &prompt,
        }],
    };

    let response = client
        .post(&endpoint)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .map_err(|e| TipsError::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(TipsError::Http(format!(
            "el servicio devolvió HTTP {}",
            response.status()
        )));
    }

    let body: ChatResponse = response
        .json()
        .map_err(|e| TipsError::InvalidResponse(e.to_string()))?;

    let content = body
        .choices
        .first()
        .map(|c| c.message.content.as_str())
        .unwrap_or_default();

    let tips = parse_tips(content);
    if tips.is_empty() {
        return Err(TipsError::NoTips);
    }
    Ok(tips)
}

#[cfg(test)]
mod tests {
    use super::{MAX_THREATS_LEN, Role, TipsError, TipsRequest, build_prompt, parse_tips};

    #[test]
    fn la_peticion_valida_el_panorama_de_amenazas() {
        assert!(matches!(
            TipsRequest::new(Role::Worker, "   ".into()),
            Err(TipsError::EmptyThreats)
        ));
        assert!(matches!(
            TipsRequest::new(Role::Worker, "x".repeat(MAX_THREATS_LEN + 1)),
            Err(TipsError::ThreatsTooLong(_))
        ));
        assert!(TipsRequest::new(Role::Worker, "x".repeat(MAX_THREATS_LEN)).is_ok());
    }

    #[test]
    fn el_prompt_lleva_rol_y_amenazas() {
        let request = TipsRequest::new(Role::Admin, "Campaña de ransomware activa".into()).unwrap();
        let prompt = build_prompt(&request);
        assert!(prompt.contains("administrador de sistemas"));
        assert!(prompt.contains("Campaña de ransomware activa"));
    }

    #[test]
    fn parse_tips_quita_vinetas_y_numeracion() {
        let content = "- Usa un gestor de contraseñas\n\
                       2. Activa la 2FA\n\
                       \n\
                       • Desconfía de adjuntos inesperados\n";
        assert_eq!(
            parse_tips(content),
            vec![
                "Usa un gestor de contraseñas",
                "Activa la 2FA",
                "Desconfía de adjuntos inesperados",
            ]
        );
    }

    #[test]
    fn parse_tips_conserva_lineas_sin_marcador() {
        assert_eq!(parse_tips("Un único consejo"), vec!["Un único consejo"]);
        assert!(parse_tips("\n  \n").is_empty());
    }

    #[test]
    fn la_respuesta_del_servicio_se_deserializa() {
        let body = r#"{"choices":[{"message":{"content":"- Consejo uno\n- Consejo dos"}}]}"#;
        let parsed: super::ChatResponse = serde_json::from_str(body).unwrap();
        let tips = parse_tips(&parsed.choices[0].message.content);
        assert_eq!(tips, vec!["Consejo uno", "Consejo dos"]);
    }

    #[test]
    fn los_roles_tienen_etiqueta_de_formulario() {
        assert_eq!(Role::Worker.label(), "Empleado");
        assert_eq!(Role::Admin.label(), "Administrador");
    }
}
