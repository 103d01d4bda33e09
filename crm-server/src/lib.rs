pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, profile, register},
        auth_service::AuthService,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    companies::{
        companies::{create_company, delete_company, get_company, list_companies, update_company},
        company_dto::CompanyDto,
        company_list_response::CompanyListResponse,
        company_response::CompanyResponse,
        create_company_request::CreateCompanyRequest,
        update_company_request::UpdateCompanyRequest,
    },
    contacts::{
        contact_dto::ContactDto,
        contact_list_response::ContactListResponse,
        contact_response::ContactResponse,
        contacts::{create_contact, delete_contact, get_contact, list_contacts, update_contact},
        create_contact_request::CreateContactRequest,
        update_contact_request::UpdateContactRequest,
    },
    dashboard::{dashboard::get_dashboard, dashboard_response::DashboardResponse},
    deals::{
        create_deal_request::CreateDealRequest,
        deal_dto::DealDto,
        deal_list_response::DealListResponse,
        deal_response::DealResponse,
        deals::{create_deal, delete_deal, get_deal, list_deals, update_deal},
        update_deal_request::UpdateDealRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    list_query::ListQuery,
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
