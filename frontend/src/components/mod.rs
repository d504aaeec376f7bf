pub mod notice_toast;

pub use notice_toast::NoticeToast;
