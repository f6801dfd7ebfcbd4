//! Keybinding definitions
//!
//! The table drives the help dialog and the status bar hints; the handler
//! matches keys directly.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active in the expense form
    Inject,
    /// Active in the dashboard
    Dashboard,
    /// Active in dialogs
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Registro",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(2),
        modifiers: KeyModifiers::NONE,
        description: "Panel",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Salir",
        context: KeyContext::Global,
    },
    // Expense form
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Siguiente campo",
        context: KeyContext::Inject,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Campo anterior",
        context: KeyContext::Inject,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Pagador / categoría anterior",
        context: KeyContext::Inject,
    },
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Pagador / categoría siguiente",
        context: KeyContext::Inject,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Registrar gasto",
        context: KeyContext::Inject,
    },
    // Dashboard
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        description: "Bajar",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        description: "Subir",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::NONE,
        description: "Borrar gasto",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('r'),
        modifiers: KeyModifiers::NONE,
        description: "Recargar",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        description: "Ayuda",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Salir",
        context: KeyContext::Dashboard,
    },
    // Dialogs
    Keybinding {
        key: KeyCode::Char('s'),
        modifiers: KeyModifiers::NONE,
        description: "Confirmar",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Cancelar / cerrar",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a context (including global)
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    // BackTab already implies Shift
    if kb.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(kb.key, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Supr".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}
