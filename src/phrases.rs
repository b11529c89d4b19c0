//! Fixed Arabic phrase tables for the queue display system.

/// Clinic directions, keyed by the clinic number shown on the display.
pub const CLINICS: &[(u32, &str)] = &[
    (1, "التوجه إلى عيادة طب الأسرة"),
    (2, "التوجه إلى عيادة الباطنة"),
    (3, "التوجه إلى عيادة الأطفال"),
    (4, "التوجه إلى عيادة الأسنان"),
    (5, "التوجه إلى عيادة النساء والتوليد"),
    (6, "التوجه إلى عيادة الجلدية"),
    (7, "التوجه إلى عيادة الأنف والأذن"),
    (8, "التوجه إلى عيادة العيون"),
    (9, "التوجه إلى عيادة القلب"),
    (10, "التوجه إلى عيادة الجراحة"),
];

/// Waiting-room announcements, played by 1-based position.
pub const ANNOUNCEMENTS: &[&str] = &[
    "اهلاً وسهلاً بكم فى المركز رجاء الانتظار بالاستراحه",
    "نرحب بكم وسيتم الاتصال بكم قريباً",
    "شكراً لانتظاركم، سنقوم بخدمتكم في أقرب وقت",
    "نرجو منكم الانتظار قليلاً، سيتم النداء عليكم",
    "مرحباً بكم في مركزنا، الرجاء الجلوس في منطقة الانتظار",
];

/// "Client number {n}" call-out phrase.
pub fn number_phrase(n: u32) -> String {
    format!("على العميل رقم {}", n)
}
