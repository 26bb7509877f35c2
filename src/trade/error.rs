//! Tipo de erro unificado do motor de trade com formatação estável.
use core::fmt;
use std::collections::BTreeMap;

use crate::trade::error_catalog::{default_locale_message, TradeErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.chars() {
        // todo caractere de controle vira espaço (ESC/BEL inclusos), não só
        // quebra de linha e tab — contexto alimenta strings de UI e log
        if ch.is_control() {
            cleaned.push(' ');
        } else {
            cleaned.push(ch);
        }
    }
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated = cleaned
            .chars()
            .take(CONTEXT_VALUE_MAX - 1)
            .collect::<String>();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn escape_json(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0c}' => escaped.push_str("\\f"),
            c if c.is_control() => {
                use core::fmt::Write as _;
                let _ = write!(&mut escaped, "\\u{:04x}", c as u32);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Erro de validação/precificação com contexto estruturado.
#[derive(Debug, Clone)]
pub struct TradeError {
    pub code: TradeErrorCode,
    pub context: BTreeMap<String, String>,
}

impl TradeError {
    /// Cria um novo erro sem contexto adicional.
    pub fn new(code: TradeErrorCode) -> Self {
        Self {
            code,
            context: BTreeMap::new(),
        }
    }

    /// Adiciona um par chave/valor ao contexto.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key_string = key.into();
        if !key_string.is_empty() {
            let sanitized = sanitize_value(&value.to_string());
            self.context.insert(key_string, sanitized);
        }
        self
    }

    /// Mensagem curta para UI: `[código] mensagem fixa do catálogo`.
    /// As mensagens são cópia fixa do produto; nada do contexto entra aqui.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), default_locale_message(self.code))
    }

    /// Serialização estável em JSON (uma linha) para logs.
    pub fn to_log_json(&self) -> String {
        let message = default_locale_message(self.code);
        let mut json = String::from("{");
        json.push_str("\"code\":\"");
        json.push_str(&escape_json(self.code.code()));
        json.push_str("\",\"title\":\"");
        json.push_str(&escape_json(self.code.title()));
        json.push_str("\",\"message\":\"");
        json.push_str(&escape_json(message));
        json.push_str("\",\"context\":{");
        let mut first = true;
        for (key, value) in &self.context {
            if !first {
                json.push(',');
            }
            first = false;
            json.push('"');
            json.push_str(&escape_json(key));
            json.push_str("\":\"");
            json.push_str(&escape_json(value));
            json.push('"');
        }
        json.push_str("}}");
        json
    }
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for TradeError {}

/// Resultado padrão para operações do motor.
pub type Result<T> = std::result::Result<T, TradeError>;

#[macro_export]
macro_rules! trade_err {
  ($code:expr) => {{
    $crate::trade::error::TradeError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::trade::error::TradeError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
  ($code:expr, $($key:expr => $value:expr),+ $(,)?) => {{
    let mut err = $crate::trade::error::TradeError::new($code);
    $(
      err = err.with_context($key, $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! trade_bail {
  ($($tt:tt)*) => {
    return Err($crate::trade_err!($($tt)*));
  };
}
