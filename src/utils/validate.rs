/// 作业标题校验：不能为空
pub fn validate_assignment_title(title: &str) -> Result<(), &'static str> {
    if title.is_empty() {
        return Err("Assignment title is required");
    }
    Ok(())
}

/// 提交内容校验：不能为空或仅包含空白
pub fn validate_submission_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("Submission content must not be blank");
    }
    Ok(())
}

/// 分数输入校验：必须填写
pub fn validate_score_input(score: &str) -> Result<(), &'static str> {
    if score.is_empty() {
        return Err("Score is required");
    }
    Ok(())
}

/// 登录表单校验：用户名与密码都不能为空，不做凭据核对
pub fn validate_login_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Username is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}
