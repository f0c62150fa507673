pub mod http_course_gateway;
pub mod http_session_source;
