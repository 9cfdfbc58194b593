//! Built-in content shown when the content service has no records.

use crate::model::{ContentRecord, Entity, FaqEntry, GalleryImage, Policy, Program};

const IMG_SPEECH: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_2.png";
const IMG_DRAWING: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_3.png";
const IMG_FAMILY: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_4.png";
const IMG_PHYSIO: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_5.png";

fn faq(id: &str, question: &str, question_ar: &str, answer: &str, answer_ar: &str) -> FaqEntry {
    FaqEntry {
        id: id.to_string(),
        question: question.to_string(),
        question_ar: Some(question_ar.to_string()),
        answer: answer.to_string(),
        answer_ar: Some(answer_ar.to_string()),
    }
}

fn image(id: &str, url: &str, alt: &str, alt_ar: &str) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        url: url.to_string(),
        alt: alt.to_string(),
        alt_ar: Some(alt_ar.to_string()),
    }
}

fn program(
    id: &str,
    (title, title_ar): (&str, &str),
    (description, description_ar): (&str, &str),
    image: &str,
) -> Program {
    Program {
        id: id.to_string(),
        title: title.to_string(),
        title_ar: Some(title_ar.to_string()),
        description: description.to_string(),
        description_ar: Some(description_ar.to_string()),
        image: image.to_string(),
    }
}

fn policy(id: &str, title: &str, title_ar: &str, text: &str, text_ar: &str) -> Policy {
    Policy {
        id: id.to_string(),
        title: title.to_string(),
        title_ar: Some(title_ar.to_string()),
        text: text.to_string(),
        text_ar: Some(text_ar.to_string()),
    }
}

impl ContentRecord for FaqEntry {
    const ENTITY: Entity = Entity::Faq;

    fn id(&self) -> &str {
        &self.id
    }

    fn defaults() -> Vec<Self> {
        vec![
            faq(
                "1",
                "What services does the center provide?",
                "ما هي الخدمات التي يقدمها المركز؟",
                "We offer a comprehensive range of services including speech therapy, sensory and occupational therapy, physical rehabilitation, psychological counseling, physiotherapy, and academic education.",
                "نقدم مجموعة شاملة من الخدمات تشمل جلسات التخاطب، العلاج الحسي والوظيفي، التأهيل الحركي، الاستشارات النفسية، العلاج الطبيعي، والتعليم الأكاديمي.",
            ),
            faq(
                "2",
                "How long does one session take?",
                "كم تستغرق الجلسة الواحدة؟",
                "A session typically lasts between 45 to 60 minutes, depending on the type of service and the child's needs.",
                "تتراوح مدة الجلسة عادة بين 45 إلى 60 دقيقة، حسب نوع الخدمة واحتياجات الطفل.",
            ),
            faq(
                "3",
                "Can parents attend the sessions?",
                "هل يمكن للأهل حضور الجلسات؟",
                "Yes, we encourage parents to participate in sessions as it helps enhance development and transfer skills to home.",
                "نعم، نشجع مشاركة الأهل في الجلسات لأن ذلك يساعد على تعزيز التطور ونقل المهارات إلى المنزل.",
            ),
            faq(
                "4",
                "How can I book an appointment?",
                "كيف يمكنني حجز موعد؟",
                "You can book an appointment by filling out the booking form on the website or contacting us by phone or WhatsApp.",
                "يمكنك حجز موعد من خلال ملء نموذج الحجز على الموقع أو التواصل معنا عبر الهاتف أو واتساب.",
            ),
            faq(
                "5",
                "Is the center accredited?",
                "هل المركز معتمد؟",
                "Yes, the center is accredited and all our specialists hold recognized certificates and are trained in the latest methods.",
                "نعم، المركز معتمد وجميع أخصائيينا حاصلون على شهادات معترف بها ومدربون على أحدث الأساليب.",
            ),
            faq(
                "6",
                "What are the working hours?",
                "ما هي ساعات العمل؟",
                "We work from Saturday to Thursday from 7:30 AM to 8:00 PM. We are closed on Friday.",
                "نعمل من السبت إلى الخميس من الساعة 7:30 صباحاً حتى 8:00 مساءً. نحن مغلقون يوم الجمعة.",
            ),
        ]
    }
}

impl ContentRecord for GalleryImage {
    const ENTITY: Entity = Entity::GalleryImage;

    fn id(&self) -> &str {
        &self.id
    }

    fn defaults() -> Vec<Self> {
        vec![
            image(
                "1",
                IMG_SPEECH,
                "Child speech therapy session with specialist",
                "جلسة تخاطب طفل مع اخصائي",
            ),
            image(
                "2",
                IMG_DRAWING,
                "Children drawing with teacher",
                "اطفال يرسمون مع معلم",
            ),
            image(
                "3",
                IMG_FAMILY,
                "Family talking with center team",
                "اسرة تتحدث مع فريق المركز",
            ),
            image(
                "4",
                IMG_PHYSIO,
                "Equipped physiotherapy room",
                "غرفة علاج طبيعي مجهزة",
            ),
            image(
                "5",
                IMG_SPEECH,
                "Child speech therapy session with specialist",
                "جلسة تخاطب طفل مع اخصائي",
            ),
            image(
                "6",
                IMG_DRAWING,
                "Children drawing with teacher",
                "اطفال يرسمون مع معلم",
            ),
        ]
    }
}

impl ContentRecord for Program {
    const ENTITY: Entity = Entity::Program;

    fn id(&self) -> &str {
        &self.id
    }

    fn defaults() -> Vec<Self> {
        vec![
            program(
                "1",
                ("Creative Programs", "برامج إبداعية"),
                (
                    "Various artistic and musical activities that help children express themselves and develop their creative and fine motor skills.",
                    "أنشطة فنية وموسيقية متنوعة تساعد الأطفال على التعبير عن أنفسهم وتنمية مهاراتهم الإبداعية والحركية الدقيقة.",
                ),
                IMG_DRAWING,
            ),
            program(
                "2",
                ("Religious Programs", "برامج دينية"),
                (
                    "Teaching Islamic values and ethics in a loving way suitable for each child's abilities, focusing on building a positive personality.",
                    "تعليم القيم والأخلاق الإسلامية بطريقة محببة ومناسبة لقدرات كل طفل، مع التركيز على بناء الشخصية الإيجابية.",
                ),
                IMG_SPEECH,
            ),
            program(
                "3",
                ("Technology Programs", "برامج تكنولوجية"),
                (
                    "Using modern technology and interactive educational applications to make learning more fun and effective.",
                    "استخدام التقنية الحديثة والتطبيقات التعليمية التفاعلية لجعل التعلم أكثر متعة وفعالية.",
                ),
                IMG_FAMILY,
            ),
            program(
                "4",
                ("Social Programs", "برامج اجتماعية"),
                (
                    "Interactive activities that help children develop communication and social interaction skills.",
                    "أنشطة تفاعلية تساعد الأطفال على تطوير مهارات التواصل والتفاعل الاجتماعي.",
                ),
                IMG_PHYSIO,
            ),
            program(
                "5",
                ("Physical Programs", "برامج حركية"),
                (
                    "Sports and movement activities that help develop gross and fine motor skills.",
                    "أنشطة رياضية وحركية تساعد على تطوير المهارات الحركية الكبرى والصغرى.",
                ),
                IMG_DRAWING,
            ),
            program(
                "6",
                ("Music Programs", "برامج موسيقية"),
                (
                    "Teaching music and rhythm to develop auditory and expressive skills.",
                    "تعليم الموسيقى والإيقاع لتطوير المهارات السمعية والتعبيرية.",
                ),
                IMG_SPEECH,
            ),
        ]
    }
}

impl ContentRecord for Policy {
    const ENTITY: Entity = Entity::Policy;

    fn id(&self) -> &str {
        &self.id
    }

    fn defaults() -> Vec<Self> {
        vec![
            policy(
                "1",
                "Privacy Policy",
                "سياسة الخصوصية",
                "We respect your privacy and are committed to protecting your personal information. All data we collect is used only to provide our services and improve your experience.",
                "نحن نحترم خصوصيتك ونلتزم بحماية معلوماتك الشخصية. جميع البيانات التي نجمعها تُستخدم فقط لتقديم خدماتنا وتحسين تجربتك.",
            ),
            policy(
                "2",
                "Terms of Service",
                "شروط الخدمة",
                "By using our services, you agree to comply with our terms of service. We reserve the right to modify these terms at any time.",
                "باستخدام خدماتنا، فإنك توافق على الالتزام بشروط الخدمة الخاصة بنا. نحن نحتفظ بالحق في تعديل هذه الشروط في أي وقت.",
            ),
            policy(
                "3",
                "Cancellation Policy",
                "سياسة الإلغاء",
                "Appointments can be cancelled or rescheduled at least 24 hours before the session time. Late cancellations may be subject to fees.",
                "يمكن إلغاء أو إعادة جدولة المواعيد قبل 24 ساعة على الأقل من موعد الجلسة. الإلغاء المتأخر قد يخضع لرسوم.",
            ),
            policy(
                "4",
                "Refund Policy",
                "سياسة الاسترداد",
                "Refunds of paid amounts are possible in certain cases according to our policy. Please contact us for more details.",
                "يمكن استرداد المبالغ المدفوعة في حالات معينة وفقاً لسياستنا. يرجى الاتصال بنا لمزيد من التفاصيل.",
            ),
        ]
    }
}
