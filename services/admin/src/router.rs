use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use transify_core::health::{healthz, readyz};
use transify_core::middleware::request_id_layer;

use crate::handlers::{
    accept_invite::{accept_invite, update_display_name},
    admins::{change_role, list_admins, remove_admin},
    audit::audit_logs,
    invite::invite_admin,
    org::lookup_org,
    otp::{send_otp, verify_otp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Admin directory
        .route("/admin/invite", post(invite_admin))
        .route("/admin/list", get(list_admins))
        .route("/admin/change-role", post(change_role))
        .route("/admin/remove", post(remove_admin))
        .route("/admin/accept-invite", post(accept_invite))
        .route("/admin/accept-invite", put(update_display_name))
        // Login
        .route("/admin/send-otp", post(send_otp))
        .route("/admin/verify-otp", post(verify_otp))
        // Organization directory
        .route("/org/lookup", get(lookup_org))
        // Audit trail
        .route("/admin/audit-logs", get(audit_logs))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
