//! Localized response templates for captain registration support.
//!
//! The original template table was a nested map keyed by status and language
//! strings; here it is a pair of total functions over the two enums, so a
//! missing (status, language) combination is a compile error rather than a
//! runtime lookup failure. Template bodies are static and read-only.

use super::types::{Language, RegistrationStatus};
use serde::{Deserialize, Serialize};

/// The single named placeholder every template carries.
pub const NAME_PLACEHOLDER: &str = "{captain_name}";

/// Non-status conversation topics with their own localized templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralTopic {
    /// Opening greeting.
    Greeting,
    /// Closing acknowledgement.
    ThankYou,
    /// Fallback when the request could not be understood.
    Unknown,
}

/// Substitute the captain name into a template.
///
/// Plain token replacement of [`NAME_PLACEHOLDER`]; the name is never
/// re-interpreted as a format string, so caller-controlled text cannot
/// smuggle directives into the output.
pub fn render(template: &'static str, captain_name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, captain_name)
}

/// Localized reply for a known registration status.
pub fn status_template(status: RegistrationStatus, language: Language) -> &'static str {
    use Language::*;
    use RegistrationStatus::*;
    match (status, language) {
        (UnderReview, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لتواصلك معنا!

طلب التسجيل الخاص بك قيد المراجعة حالياً من قبل فريقنا المختص. نحن نعمل على مراجعة جميع المستندات بعناية لضمان أفضل تجربة لك.

سنقوم بإشعارك فور الانتهاء من المراجعة.

نقدر صبرك وتفهمك 🙏"#,
        (UnderReview, English) => r#"Hello Captain {captain_name} 👋

Thank you for reaching out!

Your registration request is currently under review by our team. We are carefully reviewing all your documents to ensure the best experience for you.

You will be notified as soon as the review is complete.

We appreciate your patience 🙏"#,
        (UnderReview, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala el tawasol!

Talab el tasjeel beta3ak 7alياً under review men el team beta3na. E7na bنراجع kol el documents beta3tak b3enaya.

Ha neb3atlak notification awel ma nkhalas.

Neshkor sabrak 🙏"#,
        (DocumentsMissing, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لتواصلك معنا.

لاحظنا أن بعض المستندات المطلوبة ناقصة أو تحتاج إلى تحديث.

📄 الخطوات المطلوبة:
• افتح التطبيق وادخل على حسابك
• اذهب إلى قسم "المستندات"
• ارفع المستندات الناقصة بصورة واضحة
• تأكد أن جميع الوثائق سارية المفعول

بمجرد استلام المستندات الكاملة، سنراجع طلبك فوراً ✅

نحن هنا لمساعدتك!"#,
        (DocumentsMissing, English) => r#"Hello Captain {captain_name} 👋

Thank you for contacting us.

We noticed that some required documents are missing or need to be updated.

📄 Required Steps:
• Open the app and log into your account
• Go to the "Documents" section
• Upload the missing documents in clear quality
• Make sure all documents are valid and not expired

Once we receive the complete documents, we'll review your request right away ✅

We're here to help!"#,
        (DocumentsMissing, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala el tawasol.

La7azna en fi documents na2sa aw me7taga update.

📄 El Khatawat el Matloba:
• Efta7 el app w login 3ala account-ak
• Ro7 3ala section el "Documents"
• Upload el documents el na2sa b sora wade7a
• Eta2kad en kol el documents sari7a

Awel ma nestalem el documents kamla, ha nراجع talab-ak 3ala tool ✅

E7na hena 3ashan nesa3dak!"#,
        (Approved, Arabic) => r#"مبروك كابتن {captain_name}! 🎉

يسعدنا إخبارك بأن طلب التسجيل الخاص بك قد تمت الموافقة عليه!

✅ يمكنك الآن:
• تسجيل الدخول إلى حسابك
• تفعيل وضع "متصل"
• البدء في قبول الرحلات
• تحقيق الأرباح!

مرحباً بك في العائلة! نتمنى لك رحلة موفقة 🚗

بالتوفيق!"#,
        (Approved, English) => r#"Congratulations Captain {captain_name}! 🎉

We're happy to inform you that your registration has been approved!

✅ You can now:
• Log into your account
• Turn on "Online" mode
• Start accepting rides
• Start earning!

Welcome to the family! We wish you a great journey 🚗

Good luck!"#,
        (Approved, Arabizi) => r#"Mabrook Captain {captain_name}! 🎉

Mabsooteen n2ollak en talab el tasjeel beta3ak etm el mowaf2a 3aleh!

✅ Delwa2ty te2dar:
• Login 3ala account-ak
• Sha8al "Online" mode
• Tebda2 te2bal re7lat
• Tebda2 tekسب floos!

Ahlan bik fi el 3aila! Netmannalek re7la mowafa2a 🚗

Bel tawfi2!"#,
        (Rejected, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لاهتمامك بالانضمام إلينا.

نأسف لإبلاغك بأن طلب التسجيل الخاص بك لم يتم قبوله في الوقت الحالي.

🔄 خياراتك:
• التواصل مع فريق الدعم لمعرفة التفاصيل
• إعادة التقديم بعد معالجة أسباب الرفض
• تقديم استئناف إذا كنت تعتقد أن هناك خطأ

للاستفسار، نحن هنا لمساعدتك.

نتمنى لك كل التوفيق 🙏"#,
        (Rejected, English) => r#"Hello Captain {captain_name} 👋

Thank you for your interest in joining us.

We regret to inform you that your registration request has not been accepted at this time.

🔄 Your options:
• Contact our support team for more details
• Reapply after addressing the rejection reasons
• Submit an appeal if you believe there was an error

For inquiries, we're here to help.

We wish you all the best 🙏"#,
        (Rejected, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala ehtimamak bel join ma3ana.

Mota2asfeen n2ollak en talab el tasjeel beta3ak ma etmش 2aboloh delwa2ty.

🔄 El e5tiyarat beta3tak:
• Etواصل ma3 el support team 3ashan ta3raf el tafaseel
• 2addem tany ba3d ma t3aleg asbab el rafd
• 2addem appeal law fakker en fi 8alat

Lel este5sarat, e7na hena 3ashan nesa3dak.

Netmannalek kol el tawfi2 🙏"#,
        (BackgroundCheck, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لتواصلك معنا.

طلب التسجيل الخاص بك يخضع حالياً للفحص الأمني. هذه خطوة ضرورية لضمان سلامة جميع المستخدمين على المنصة.

🔒 معلومات مهمة:
• هذه العملية قد تستغرق بضعة أيام
• لا تحتاج لاتخاذ أي إجراء
• سنشعرك فور اكتمال الفحص

نشكر صبرك وتعاونك! 🙏"#,
        (BackgroundCheck, English) => r#"Hello Captain {captain_name} 👋

Thank you for reaching out.

Your registration is currently undergoing a background check. This is a necessary step to ensure the safety of all users on our platform.

🔒 Important information:
• This process may take a few days
• No action is required from you
• You'll be notified once the check is complete

Thank you for your patience and cooperation! 🙏"#,
        (BackgroundCheck, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala el tawasol.

Talab el tasjeel beta3ak 7alياً fi marhalet el fa7s el amny. Dي step darورiya 3ashan ned-man safety kol el users 3al platform.

🔒 Ma3lomat mohemma:
• El process da momken yakhod kam yom
• Mesh me7tag te3mel ay 7aga
• Ha neb3atlak notification awel ma nkhalas

Neshkor sabrak w ta3awonak! 🙏"#,
        (SystemDelay, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لتواصلك معنا.

نعتذر عن التأخير في معالجة طلبك. نواجه حالياً ضغطاً كبيراً على النظام بسبب كثرة الطلبات.

⏳ ما يجب أن تعرفه:
• طلبك في قائمة الانتظار ولن يُفقد
• نعمل بأقصى سرعة لمراجعة جميع الطلبات
• سنتواصل معك فور تحديث حالة طلبك

نقدر صبرك الكبير ونعتذر مجدداً عن الإزعاج 🙏"#,
        (SystemDelay, English) => r#"Hello Captain {captain_name} 👋

Thank you for reaching out.

We apologize for the delay in processing your request. We're currently experiencing high volume due to many applications.

⏳ What you should know:
• Your request is in queue and won't be lost
• We're working as fast as possible to review all requests
• We'll contact you once your status is updated

We appreciate your patience and apologize for any inconvenience 🙏"#,
        (SystemDelay, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala el tawasol.

Beta3tezر 3an el ta2kheer fi mo3alget talab-ak. 3andena daght kebeer 3al system delwa2ty bisabab ketret el talabat.

⏳ El lazem ta3rafo:
• Talab-ak fi el queue w mesh ha yed-ya3
• E7na shaghaleen bأقصى sor3a 3ashan nراجع kol el talabat
• Ha netواصل ma3ak awel ma 7alet talab-ak tet-update

Neshkor sabrak gedan w beta3tezر tany 3an el ez3ag 🙏"#,
    }
}

/// Localized reply for a general conversation topic.
pub fn general_template(topic: GeneralTopic, language: Language) -> &'static str {
    use GeneralTopic::*;
    use Language::*;
    match (topic, language) {
        (Greeting, Arabic) => r#"مرحباً كابتن {captain_name} 👋

أهلاً بك! كيف يمكنني مساعدتك اليوم؟"#,
        (Greeting, English) => r#"Hello Captain {captain_name} 👋

Welcome! How can I help you today?"#,
        (Greeting, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Welcome! Ezay a2dar asa3dak el naharda?"#,
        (ThankYou, Arabic) => r#"شكراً لك كابتن {captain_name}! 

نحن سعداء بخدمتك. إذا كان لديك أي استفسار آخر، نحن هنا دائماً 🙏"#,
        (ThankYou, English) => r#"Thank you Captain {captain_name}!

We're happy to help. If you have any other questions, we're always here 🙏"#,
        (ThankYou, Arabizi) => r#"Shokran Captain {captain_name}!

E7na mabsooteen nesa3dak. Law 3andak ay so2al tany, e7na hena dayman 🙏"#,
        (Unknown, Arabic) => r#"مرحباً كابتن {captain_name} 👋

شكراً لتواصلك. لم أتمكن من فهم طلبك بشكل واضح.

هل يمكنك إعادة صياغة سؤالك أو اختيار أحد الخيارات التالية؟
• الاستفسار عن حالة التسجيل
• المستندات المطلوبة
• التواصل مع الدعم الفني

نحن هنا لمساعدتك!"#,
        (Unknown, English) => r#"Hello Captain {captain_name} 👋

Thank you for reaching out. I couldn't clearly understand your request.

Could you please rephrase your question or choose one of the following options?
• Check registration status
• Required documents
• Contact technical support

We're here to help!"#,
        (Unknown, Arabizi) => r#"Ahlan Captain {captain_name} 👋

Shokran 3ala el tawasol. Ma2dertش afham talab-ak kwayes.

Momken te3eed tekteb so2alak aw tekhtar wa7ed men el options dي?
• El este5sar 3an 7alet el tasjeel
• El documents el matloba
• El tawasol ma3 el support

E7na hena 3ashan nesa3dak!"#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_template_carries_the_name_placeholder() {
        for &status in RegistrationStatus::ALL {
            for &language in Language::ALL {
                let template = status_template(status, language);
                assert!(
                    template.contains(NAME_PLACEHOLDER),
                    "missing placeholder for {status:?}/{language:?}"
                );
            }
        }
    }

    #[test]
    fn every_general_template_carries_the_name_placeholder() {
        for topic in [GeneralTopic::Greeting, GeneralTopic::ThankYou, GeneralTopic::Unknown] {
            for &language in Language::ALL {
                assert!(general_template(topic, language).contains(NAME_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn render_substitutes_every_occurrence() {
        assert_eq!(render("hi {captain_name}, bye {captain_name}", "Omar"), "hi Omar, bye Omar");
    }

    #[test]
    fn render_does_not_reinterpret_the_name() {
        let out = render("hello {captain_name}", "{captain_name}");
        assert_eq!(out, "hello {captain_name}");
    }

    #[test]
    fn approved_english_congratulates() {
        let template = status_template(RegistrationStatus::Approved, Language::English);
        assert!(template.contains("Congratulations"));
    }
}
