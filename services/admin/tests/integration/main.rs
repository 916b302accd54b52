
mod accept_invite_test;
mod admins_test;
mod audit_test;
mod org_test;
