use crate::{Key, Locale};

pub(crate) fn lookup(locale: Locale, key: Key) -> &'static str {
    match locale {
        Locale::Fr => fr(key),
        Locale::En => en(key),
        Locale::Ar => ar(key),
    }
}

fn fr(key: Key) -> &'static str {
    match key {
        Key::Welcome => "Bienvenue sur la plateforme NEXGlab",
        Key::Subtitle => "Laboratoire numérique \"NEXGlab\"",
        Key::Email => "Adresse Email",
        Key::EmailPlaceholder => "user@NEXGlab.edu.dz",
        Key::Access => "Accéder",
        Key::InvalidEmail => "Veuillez entrer une adresse email valide se terminant par @NEXGlab.edu.dz",
        Key::SelectUniversity => "Sélectionnez votre université",
        Key::SearchUniversity => "Rechercher une université...",
        Key::NoUniversityFound => "Aucune université trouvée",
        Key::Enstp => "École Nationale Supérieure des Travaux Publics",
        Key::EnstpWelcome => "Bienvenue à l'École Nationale Supérieure des Travaux Publics",
        Key::EnstpConnect => "Connectez-vous pour accéder à votre espace laboratoire NEXGlab.",
        Key::EnstpEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::Login => "Se connecter",
        Key::InvalidEnstpEmail => "Veuillez entrer une adresse email institutionnelle valide se terminant par @enstp.edu.dz",
        Key::UniversityEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::InvalidUniversityEmail => "Veuillez entrer une adresse email valide avec le format user.NEXGlap@enstp.edu.dz",
        Key::Dashboard => "Tableau de Bord",
        Key::Profile => "Profil",
        Key::Logout => "Déconnexion",
        Key::Cp => "Cycle Préparatoire",
        Key::Ci => "Cycle Ingénieur",
        Key::CpDescription => "Les deux premières années : sciences fondamentales et bases de l'ingénierie.",
        Key::CiDescription => "Formation spécialisée en génie civil, travaux publics et géotechnique.",
        Key::SelectCycle => "Sélectionnez votre cycle d'études",
        Key::SelectDepartment => "Sélectionnez votre département",
        Key::LabTopics => "Travaux pratiques disponibles",
        Key::ComingSoon => "Bientôt disponible",
        Key::EngineeringData => "Données d'Ingénierie de Base",
        Key::ModelingData => "Données de Modélisation Scientifique",
        Key::Modules => "Modules",
        Key::CompletedLabs => "TP Complétés",
        Key::NextSession => "Prochaine Session",
        Key::Copyright => "© 2025 NEXGlab - Tous droits réservés",
        Key::Student => "Étudiant",
        Key::CivilEngineering => "Génie Civil",
        Key::PublicWorks => "Travaux Publics",
        Key::Geotechnics => "Géotechnique",
        Key::Structures => "Structures, matériaux et conception",
        Key::Roads => "Routes, ponts et infrastructures",
        Key::Soils => "Sols, fondations et stabilité",
        Key::Language => "Langue",
        Key::Back => "Retour",
        Key::Search => "Rechercher",
        Key::OpenLab => "Ouvrir le laboratoire",
        Key::LabLoading => "Chargement du laboratoire...",
        Key::LabSlow => "Le chargement du laboratoire prend plus de temps que prévu. Veuillez patienter...",
        Key::LabUnavailable => "Impossible de charger le laboratoire. Veuillez réessayer plus tard.",
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::Welcome => "Welcome to NEXGlab platform",
        Key::Subtitle => "Digital Laboratory \"NEXGlab\"",
        Key::Email => "Email Address",
        Key::EmailPlaceholder => "user@NEXGlab.edu.dz",
        Key::Access => "Access",
        Key::InvalidEmail => "Please enter a valid email address ending with @NEXGlab.edu.dz",
        Key::SelectUniversity => "Select your university",
        Key::SearchUniversity => "Search for a university...",
        Key::NoUniversityFound => "No university found",
        Key::Enstp => "National School of Public Works",
        Key::EnstpWelcome => "Welcome to the National School of Public Works",
        Key::EnstpConnect => "Log in to access your NEXGlab laboratory space.",
        Key::EnstpEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::Login => "Log in",
        Key::InvalidEnstpEmail => "Please enter a valid institutional email address ending with @enstp.edu.dz",
        Key::UniversityEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::InvalidUniversityEmail => "Please enter a valid email address in the format user.NEXGlap@enstp.edu.dz",
        Key::Dashboard => "Dashboard",
        Key::Profile => "Profile",
        Key::Logout => "Logout",
        Key::Cp => "Preparatory Cycle",
        Key::Ci => "Engineering Cycle",
        Key::CpDescription => "The first two years: fundamental sciences and engineering basics.",
        Key::CiDescription => "Specialised training in civil engineering, public works and geotechnics.",
        Key::SelectCycle => "Select your study cycle",
        Key::SelectDepartment => "Select your department",
        Key::LabTopics => "Available lab sessions",
        Key::ComingSoon => "Coming soon",
        Key::EngineeringData => "Basic Engineering Data",
        Key::ModelingData => "Scientific Modeling Data",
        Key::Modules => "Modules",
        Key::CompletedLabs => "Completed Labs",
        Key::NextSession => "Next Session",
        Key::Copyright => "© 2025 NEXGlab - All rights reserved",
        Key::Student => "Student",
        Key::CivilEngineering => "Civil Engineering",
        Key::PublicWorks => "Public Works",
        Key::Geotechnics => "Geotechnics",
        Key::Structures => "Structures, materials and design",
        Key::Roads => "Roads, bridges and infrastructure",
        Key::Soils => "Soils, foundations and stability",
        Key::Language => "Language",
        Key::Back => "Back",
        Key::Search => "Search",
        Key::OpenLab => "Open the lab",
        Key::LabLoading => "Loading the lab...",
        Key::LabSlow => "The lab is taking longer than expected to load. Please wait...",
        Key::LabUnavailable => "Unable to load the lab. Please try again later.",
    }
}

fn ar(key: Key) -> &'static str {
    match key {
        Key::Welcome => "مرحبًا بكم في منصة NEXGlab",
        Key::Subtitle => "المختبر الرقمي \"NEXGlab\"",
        Key::Email => "البريد الإلكتروني",
        Key::EmailPlaceholder => "user@NEXGlab.edu.dz",
        Key::Access => "الدخول",
        Key::InvalidEmail => "يرجى إدخال عنوان بريد إلكتروني صالح ينتهي بـ @NEXGlab.edu.dz",
        Key::SelectUniversity => "اختر جامعتك",
        Key::SearchUniversity => "البحث عن جامعة...",
        Key::NoUniversityFound => "لم يتم العثور على جامعة",
        Key::Enstp => "المدرسة الوطنية العليا للأشغال العمومية",
        Key::EnstpWelcome => "مرحبًا بكم في المدرسة الوطنية العليا للأشغال العمومية",
        Key::EnstpConnect => "قم بتسجيل الدخول للوصول إلى مساحة مختبر NEXGlab الخاصة بك.",
        Key::EnstpEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::Login => "تسجيل الدخول",
        Key::InvalidEnstpEmail => "يرجى إدخال عنوان بريد إلكتروني مؤسسي صالح ينتهي بـ @enstp.edu.dz",
        Key::UniversityEmailPlaceholder => "user.NEXGlap@enstp.edu.dz",
        Key::InvalidUniversityEmail => "يرجى إدخال عنوان بريد إلكتروني صالح بالصيغة user.NEXGlap@enstp.edu.dz",
        Key::Dashboard => "لوحة التحكم",
        Key::Profile => "الملف الشخصي",
        Key::Logout => "تسجيل الخروج",
        Key::Cp => "الدورة التحضيرية",
        Key::Ci => "دورة الهندسة",
        Key::CpDescription => "السنتان الأوليان: العلوم الأساسية وأسس الهندسة.",
        Key::CiDescription => "تكوين متخصص في الهندسة المدنية والأشغال العمومية والجيوتقنية.",
        Key::SelectCycle => "اختر دورتك الدراسية",
        Key::SelectDepartment => "اختر قسمك",
        Key::LabTopics => "الأعمال التطبيقية المتاحة",
        Key::ComingSoon => "قريبًا",
        Key::EngineeringData => "بيانات الهندسة الأساسية",
        Key::ModelingData => "بيانات النمذجة العلمية",
        Key::Modules => "الوحدات",
        Key::CompletedLabs => "المختبرات المكتملة",
        Key::NextSession => "الجلسة القادمة",
        Key::Copyright => "© 2025 NEXGlab - جميع الحقوق محفوظة",
        Key::Student => "طالب",
        Key::CivilEngineering => "الهندسة المدنية",
        Key::PublicWorks => "الأشغال العمومية",
        Key::Geotechnics => "الجيوتقنية",
        Key::Structures => "الهياكل والمواد والتصميم",
        Key::Roads => "الطرق والجسور والبنية التحتية",
        Key::Soils => "التربة والأساسات والاستقرار",
        Key::Language => "اللغة",
        Key::Back => "رجوع",
        Key::Search => "بحث",
        Key::OpenLab => "فتح المختبر",
        Key::LabLoading => "جارٍ تحميل المختبر...",
        Key::LabSlow => "يستغرق تحميل المختبر وقتًا أطول من المتوقع. يرجى الانتظار...",
        Key::LabUnavailable => "تعذر تحميل المختبر. يرجى المحاولة لاحقًا.",
    }
}
