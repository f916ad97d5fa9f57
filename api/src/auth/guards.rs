//! Role and ownership policy, in one place instead of inline per route.

use db::models::class::Class;
use db::models::report::ReportRow;
use db::models::user::Role;

use crate::auth::claims::AuthUser;
use crate::response::ApiError;

/// Roles allowed to create classes.
pub const CLASS_CREATOR_ROLES: &[Role] = &[Role::Lecturer, Role::Prl, Role::Pl];

pub fn require_any_role(
    user: &AuthUser,
    allowed: &[Role],
    action: &str,
) -> Result<(), ApiError> {
    if allowed.contains(&user.0.role) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "Your role is not permitted to {action}"
        )))
    }
}

/// Class mutations are allowed for program leaders and the class creator.
/// Ownership is keyed on the creator's user id, not the display name.
pub fn require_class_ownership(user: &AuthUser, class: &Class) -> Result<(), ApiError> {
    if user.0.role == Role::Pl || class.created_by_id == user.0.sub {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only the class creator or a program leader may modify this class".into(),
        ))
    }
}

/// Lecturers may only see reports they submitted; every other role sees all.
pub fn require_report_visibility(user: &AuthUser, report: &ReportRow) -> Result<(), ApiError> {
    if user.0.role == Role::Lecturer && report.submitted_by != user.0.sub {
        Err(ApiError::Forbidden(
            "Lecturers may only view their own reports".into(),
        ))
    } else {
        Ok(())
    }
}
