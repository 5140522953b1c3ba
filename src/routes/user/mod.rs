pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub const USER_CREATED: &str = "Usuario criado com sucesso";
pub const USER_DELETED: &str = "Usuário deletado com sucesso";

pub const LIST_FAILED: &str = "Erro ao listar usuários";
pub const GET_FAILED: &str = "Erro ao procurar o usuario";
pub const CREATE_FAILED: &str = "error when creating user";
pub const DELETE_FAILED: &str = "Erro ao deletar usuário por ID";
pub const UPDATE_FAILED: &str = "Erro ao atualizar usuário";
