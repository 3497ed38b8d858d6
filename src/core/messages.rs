//! User-facing strings
//!
//! Toasts and labels are plain localized strings; no error codes cross the UI
//! boundary.

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Locale::En,
            _ => Locale::Vi,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Vi => &VI,
            Locale::En => &EN,
        }
    }
}

/// Message catalog for one locale
#[derive(Debug)]
pub struct Messages {
    pub register_success: &'static str,
    pub register_failed: &'static str,
    pub login_success: &'static str,
    pub invalid_credentials: &'static str,
    pub unknown_error: &'static str,
    pub required_field: &'static str,

    pub auth_heading: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub login_button: &'static str,
    pub register_button: &'static str,
    pub continue_with: &'static str,
    pub no_account: &'static str,
    pub have_account: &'static str,
    pub switch_to_register: &'static str,
    pub switch_to_login: &'static str,

    pub settings_title: &'static str,
    pub settings_subtitle: &'static str,
    pub settings_name_label: &'static str,
    pub photo_label: &'static str,
    pub change_photo: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub open_settings: &'static str,
    pub not_found: &'static str,
}

pub static VI: Messages = Messages {
    register_success: "Đăng ký thành công",
    register_failed: "Vui lòng nhập đầy đủ thông tin",
    login_success: "Đăng nhập thành công",
    invalid_credentials: "Sai thông tin tài khoản",
    unknown_error: "Lỗi không xác định xảy ra!",
    required_field: "Trường này là bắt buộc",

    auth_heading: "Đăng nhập tài khoản của bạn",
    name_label: "Tên của bạn",
    email_label: "Địa chỉ Email",
    password_label: "Mật khẩu",
    login_button: "Đăng nhập",
    register_button: "Đăng ký",
    continue_with: "Hoặc tiếp tục với",
    no_account: "Bạn chưa có tài khoản?",
    have_account: "Đã có tài khoản?",
    switch_to_register: "Đăng ký tài khoản",
    switch_to_login: "Đăng nhập ngay",

    settings_title: "Tài khoản",
    settings_subtitle: "Cập nhật thông tin cá nhân của bạn",
    settings_name_label: "Tên",
    photo_label: "Ảnh đại diện",
    change_photo: "Thay đổi",
    cancel: "Hủy",
    save: "Lưu",
    open_settings: "Cài đặt",
    not_found: "Không tìm thấy trang",
};

pub static EN: Messages = Messages {
    register_success: "Registration successful",
    register_failed: "Please fill in all the information",
    login_success: "Signed in successfully",
    invalid_credentials: "Incorrect account details",
    unknown_error: "An unknown error occurred!",
    required_field: "This field is required",

    auth_heading: "Sign in to your account",
    name_label: "Your name",
    email_label: "Email address",
    password_label: "Password",
    login_button: "Sign in",
    register_button: "Register",
    continue_with: "Or continue with",
    no_account: "Don't have an account?",
    have_account: "Already have an account?",
    switch_to_register: "Create an account",
    switch_to_login: "Sign in now",

    settings_title: "Profile",
    settings_subtitle: "Edit your public information",
    settings_name_label: "Name",
    photo_label: "Photo",
    change_photo: "Change",
    cancel: "Cancel",
    save: "Save",
    open_settings: "Settings",
    not_found: "Page not found",
};
