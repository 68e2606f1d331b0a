//! User-facing strings.
//!
//! The backend serves a Turkish audience, so every static message shown by
//! the client lives here. Server-provided `detail` messages are shown as-is.

pub const LOADING: &str = "Yükleniyor...";
pub const REQUIRED_FIELDS: &str = "Lütfen tüm alanları doldurunuz";

// Auth
pub const REGISTER_FAILED: &str = "Kayıt başarısız";
pub const LOGIN_FAILED: &str = "Giriş başarısız";

// Exam selection
pub const EXAMS_LOAD_FAILED: &str = "Sınavlar yüklenirken hata oluştu";
pub const EXAM_NOT_SELECTED: &str = "Lütfen bir sınav seçiniz";
pub const EXAM_SELECT_FAILED: &str = "Sınav seçimi sırasında hata oluştu";

// Questionnaire
pub const QUESTIONNAIRE_SUBMIT_FAILED: &str = "Anket gönderilirken hata oluştu";

// Mini test
pub const MINI_TEST_LOAD_FAILED: &str = "Mini test yüklenirken hata oluştu";
pub const MINI_TEST_SUBMIT_FAILED: &str = "Test değerlendirilirken hata oluştu";

// Weekly plan
pub const PLANS_LOAD_FAILED: &str = "Planlar yüklenirken hata oluştu";
pub const PLAN_CREATE_FAILED: &str = "Plan oluşturulurken hata oluştu";
pub const PLAN_DELETE_FAILED: &str = "Plan silinirken hata oluştu";
pub const NO_PLANS: &str = "Plan bulunamadı.";

// Dashboard / profile
pub const DASHBOARD_LOAD_FAILED: &str = "Veriler yüklenirken hata oluştu";
pub const PROFILE_LOAD_FAILED: &str = "Profil yüklenirken hata oluştu";
pub const NO_EXAMS_SELECTED: &str = "Henüz sınav seçimi yapılmadı.";
pub const NO_QUESTIONNAIRE: &str = "Henüz anket doldurulmadı.";
pub const QUESTIONNAIRE_NOT_FOUND: &str = "Anket bulunamadı.";
pub const NO_PROGRESS: &str = "Henüz ilerleme kaydı yok.";
pub const NO_AI_HISTORY: &str = "AI etkileşim geçmişi bulunamadı.";
pub const NONE: &str = "Yok";

// Chat
pub const CHAT_SEND_FAILED: &str = "Mesaj gönderilemedi.";
pub const CHAT_EMPTY: &str = "Henüz mesaj yok. Sorularınızı sormaya başlayın!";

// Mini test result table
pub const CORRECT: &str = "Doğru";
pub const INCORRECT: &str = "Yanlış";
