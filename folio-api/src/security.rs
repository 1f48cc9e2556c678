use serde::{Deserialize, Serialize};

const ANONYMOUS: &str = "anonymous";

/// 当前操作者
/// 由上游认证层写入请求扩展，业务层只用于日志归属
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub username: String,
    pub roles: Vec<String>,
}

impl Actor {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// 匿名操作者
    pub fn anonymous() -> Self {
        Self {
            username: ANONYMOUS.to_string(),
            roles: Vec::new(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.username == ANONYMOUS
    }

    /// 检查是否具有指定的角色
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::anonymous()
    }
}
