//! User-facing copy (pt-BR).

pub const LOADING: &str = "Carregando...";
pub const SELECT_ACCOUNT: &str = "Selecione uma conta";
pub const NO_ACCOUNTS: &str = "Nenhuma conta disponível";
pub const RETRY: &str = "Tentar novamente";
pub const WELCOME: &str = "Bem vindo";
pub const CLOSE_MENU: &str = "Fechar menu";
pub const LOGOUT: &str = "Sair";
pub const LOGOUT_LABEL: &str = "Sair da aplicação";
pub const MAIN_NAV_LABEL: &str = "Navegação principal";
pub const PROFILE_LABEL: &str = "Perfil do usuário";
pub const ACCOUNT_SELECT_LABEL: &str = "Conta selecionada";
