//! Local intent rules: ordered keyword predicates paired with canned or templated replies.
//!
//! Matching runs on the lowercased input in two steps. A gate predicate decides whether the
//! input is answered locally at all; only then is the reply picked from the ordered rules,
//! where the first rule whose predicate holds wins (thanks before time, time before date,
//! every small-talk rule before the health topics). Rule keywords are wider than the gate, so
//! e.g. "anxiety" alone goes to the network while "mental health anxiety" is answered locally.

use chrono::{DateTime, Local};
use rand::Rng;

/// Predicate over the lowercased input.
pub type Predicate = fn(&str) -> bool;

/// What a matched rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleResponse {
    Fixed(&'static str),
    /// `The current time is {h:mm:ss AM}. ...`
    CurrentTime,
    /// `Today is {M/D/YYYY} ({Www Mmm DD YYYY}).`
    CurrentDate,
    /// One entry of [`JOKES`].
    Joke,
}

/// A named keyword predicate and its reply.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub name: &'static str,
    pub matches: Predicate,
    pub response: RuleResponse,
}

/// Source of the current local time for templated replies.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Chooses which joke to tell; returns an index below `count`.
pub trait JokePicker: Send + Sync {
    fn pick(&self, count: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJokePicker;

impl JokePicker for RandomJokePicker {
    fn pick(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count.max(1))
    }
}

/// Always picks the same joke (index is taken modulo the joke count).
#[derive(Debug, Clone, Copy)]
pub struct FixedJokePicker(pub usize);

impl JokePicker for FixedJokePicker {
    fn pick(&self, count: usize) -> usize {
        self.0 % count.max(1)
    }
}

pub const JOKES: [&str; 10] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "Did you hear about the mathematician who's afraid of negative numbers? He'll stop at nothing to avoid them.",
    "I told my doctor that I broke my arm in two places. He told me to stop going to those places.",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "What do you call a fake noodle? An impasta!",
    "Why don't eggs tell jokes? They'd crack each other up.",
    "What's the best thing about Switzerland? I don't know, but the flag is a big plus.",
    "How do you organize a space party? You planet!",
    "Why did the bicycle fall over? Because it was two-tired!",
    "What did one ocean say to the other ocean? Nothing, they just waved.",
];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn asks_what_or_current(m: &str) -> bool {
    m.contains("what") || m.contains("current")
}

/// Inputs the default table answers without a network lookup.
pub fn is_simple_query(m: &str) -> bool {
    contains_any(m, &["hello", "hi ", "hey", "greetings"])
        || m == "hi"
        || contains_any(m, &["how are you", "how do you do", "how's it going"])
        || contains_any(m, &["who are you", "what are you"])
        || (m.contains("your") && m.contains("name"))
        || contains_any(m, &["thank", "appreciate"])
        || m == "help"
        || contains_any(m, &["can you help", "need help"])
        || (contains_any(m, &["time", "date", "day"]) && asks_what_or_current(m))
        || contains_any(m, &["joke", "funny", "make me laugh"])
        || contains_any(
            m,
            &[
                "covid",
                "coronavirus",
                "headache",
                "blood pressure",
                "diabetes",
                "heart",
                "exercise",
                "nutrition",
                "sleep",
                "mental health",
                "weight loss",
            ],
        )
}

/// Gate plus ordered rule list. Static per deployment.
#[derive(Debug, Clone)]
pub struct RuleTable {
    gate: Predicate,
    rules: Vec<IntentRule>,
}

impl RuleTable {
    /// `gate` decides whether an input is local; `rules` pick the reply once it is.
    pub fn new(gate: Predicate, rules: Vec<IntentRule>) -> Self {
        Self { gate, rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn is_local(&self, lowered: &str) -> bool {
        (self.gate)(lowered)
    }

    /// First rule matching the (already lowercased) input, if the gate lets it through.
    pub fn find(&self, lowered: &str) -> Option<&IntentRule> {
        if !self.is_local(lowered) {
            return None;
        }
        self.rules.iter().find(|rule| (rule.matches)(lowered))
    }

    /// Small talk, time/date, jokes and the fixed health topics of the HealthCare360 assistant.
    pub fn health_defaults() -> Self {
        Self::new(is_simple_query, vec![
            IntentRule {
                name: "greeting",
                matches: |m| {
                    contains_any(m, &["hello", "hi ", "hey", "greetings"]) || m == "hi"
                },
                response: RuleResponse::Fixed("Hello! How can I assist you today? Feel free to ask me about health topics, general information, or any other questions you might have."),
            },
            IntentRule {
                name: "how_are_you",
                matches: |m| contains_any(m, &["how are you", "how do you do", "how's it going"]),
                response: RuleResponse::Fixed("I'm doing well, thank you for asking! I'm here and ready to help you with any questions or information you need. How can I assist you today?"),
            },
            IntentRule {
                name: "identity",
                matches: |m| {
                    contains_any(m, &["who are you", "what are you"])
                        || (m.contains("your") && m.contains("name"))
                },
                response: RuleResponse::Fixed("I'm the AI assistant for HealthCare360. I'm designed to provide helpful information on health topics and answer general questions. I'm here to assist you with whatever information you need."),
            },
            IntentRule {
                name: "thanks",
                matches: |m| contains_any(m, &["thank", "appreciate"]),
                response: RuleResponse::Fixed("You're welcome! I'm glad I could help. If you have any other questions, feel free to ask."),
            },
            IntentRule {
                name: "help",
                matches: |m| m == "help" || contains_any(m, &["can you help", "need help"]),
                response: RuleResponse::Fixed("I'd be happy to help! You can ask me questions about health topics, general knowledge, science, history, technology, and more. What specific information are you looking for?"),
            },
            IntentRule {
                name: "weather",
                matches: |m| m.contains("weather"),
                response: RuleResponse::Fixed("I don't have access to real-time weather data. To get the current weather, you can check a weather app or website like Weather.com, AccuWeather, or your device's built-in weather app."),
            },
            IntentRule {
                name: "time",
                matches: |m| m.contains("time") && asks_what_or_current(m),
                response: RuleResponse::CurrentTime,
            },
            IntentRule {
                name: "date",
                matches: |m| contains_any(m, &["date", "day"]) && asks_what_or_current(m),
                response: RuleResponse::CurrentDate,
            },
            IntentRule {
                name: "joke",
                matches: |m| contains_any(m, &["joke", "funny", "make me laugh"]),
                response: RuleResponse::Joke,
            },
            IntentRule {
                name: "covid",
                matches: |m| contains_any(m, &["covid", "coronavirus"]),
                response: RuleResponse::Fixed("COVID-19 is caused by the SARS-CoV-2 virus. Common symptoms include fever, cough, fatigue, and loss of taste or smell. Prevention measures include vaccination, hand washing, and in some situations, wearing masks. For the most current information, please consult official health organizations like the WHO or CDC."),
            },
            IntentRule {
                name: "headache",
                matches: |m| m.contains("headache"),
                response: RuleResponse::Fixed("Headaches can be caused by various factors including stress, dehydration, lack of sleep, or eye strain. For occasional headaches, rest, hydration, and over-the-counter pain relievers may help. If you experience severe, persistent, or unusual headaches, it's important to consult with a healthcare professional."),
            },
            IntentRule {
                name: "blood_pressure",
                matches: |m| contains_any(m, &["blood pressure", "hypertension"]),
                response: RuleResponse::Fixed("Normal blood pressure is typically around 120/80 mmHg. High blood pressure (hypertension) is generally considered to be 130/80 mmHg or higher. Managing blood pressure can involve healthy eating, regular exercise, limiting sodium and alcohol, maintaining a healthy weight, not smoking, and sometimes medication as prescribed by a doctor."),
            },
            IntentRule {
                name: "diabetes",
                matches: |m| contains_any(m, &["diabetes", "blood sugar"]),
                response: RuleResponse::Fixed("Diabetes is a chronic condition affecting how your body processes blood sugar. Type 1 diabetes involves the immune system attacking insulin-producing cells, while Type 2 diabetes involves resistance to insulin. Symptoms may include increased thirst, frequent urination, hunger, fatigue, and blurred vision. Management typically involves monitoring blood sugar, medication or insulin, healthy eating, and regular physical activity."),
            },
            IntentRule {
                name: "heart",
                matches: |m| contains_any(m, &["heart", "cardiac", "cardiovascular"]),
                response: RuleResponse::Fixed("Heart health is crucial for overall wellbeing. Key factors for maintaining heart health include regular physical activity, a balanced diet low in saturated fats and sodium, not smoking, limiting alcohol, managing stress, and getting regular check-ups. Common heart conditions include coronary artery disease, heart failure, arrhythmias, and valve disorders. If you experience chest pain, shortness of breath, or other concerning symptoms, seek medical attention immediately."),
            },
            IntentRule {
                name: "exercise",
                matches: |m| contains_any(m, &["exercise", "workout", "physical activity"]),
                response: RuleResponse::Fixed("Regular exercise offers numerous health benefits, including improved cardiovascular health, stronger muscles and bones, better weight management, enhanced mental health, and reduced risk of many diseases. Adults should aim for at least 150 minutes of moderate aerobic activity or 75 minutes of vigorous activity weekly, plus muscle-strengthening activities twice a week. Always start gradually if you're new to exercise, and consider consulting a healthcare provider before beginning a new exercise program, especially if you have existing health conditions."),
            },
            IntentRule {
                name: "nutrition",
                matches: |m| contains_any(m, &["nutrition", "diet", "healthy eating", "food"]),
                response: RuleResponse::Fixed("A balanced diet typically includes plenty of fruits, vegetables, whole grains, lean proteins, and healthy fats. It's generally recommended to limit processed foods, added sugars, and excessive sodium. Nutritional needs can vary based on age, sex, activity level, and health conditions. Staying hydrated by drinking water throughout the day is also important. For personalized nutrition advice, consider consulting with a registered dietitian who can provide guidance specific to your needs and goals."),
            },
            IntentRule {
                name: "sleep",
                matches: |m| contains_any(m, &["sleep", "insomnia", "can't sleep"]),
                response: RuleResponse::Fixed("Quality sleep is essential for physical and mental health. Most adults need 7-9 hours of sleep per night. Good sleep hygiene practices include maintaining a consistent sleep schedule, creating a restful environment, limiting screen time before bed, avoiding caffeine and large meals before bedtime, and engaging in relaxation techniques. If you consistently struggle with sleep despite these measures, consider speaking with a healthcare provider, as persistent sleep issues can affect overall health."),
            },
            IntentRule {
                name: "mental_health",
                matches: |m| contains_any(m, &["mental health", "depression", "anxiety", "stress"]),
                response: RuleResponse::Fixed("Mental health is just as important as physical health. Common mental health conditions include depression, anxiety disorders, and stress-related issues. Strategies that can support mental wellbeing include regular physical activity, adequate sleep, stress management techniques like meditation or deep breathing, maintaining social connections, and seeking professional help when needed. If you're experiencing persistent mental health concerns, please consider reaching out to a healthcare provider or mental health professional."),
            },
            IntentRule {
                name: "weight",
                matches: |m| contains_any(m, &["weight loss", "lose weight", "obesity", "overweight"]),
                response: RuleResponse::Fixed("Healthy weight management typically involves a balanced approach combining nutritious eating, regular physical activity, and behavioral strategies. Sustainable weight loss generally occurs gradually, often at a rate of 1-2 pounds per week. Crash diets or extreme measures are usually not recommended as they can be difficult to maintain and may not support overall health. For personalized weight management guidance, consider consulting with healthcare providers such as doctors, registered dietitians, or weight management specialists."),
            },
        ])
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::health_defaults()
    }
}

/// Produces the reply text for a matched rule.
pub fn render_response(response: RuleResponse, clock: &dyn Clock, jokes: &dyn JokePicker) -> String {
    match response {
        RuleResponse::Fixed(text) => text.to_string(),
        RuleResponse::CurrentTime => format!(
            "The current time is {}. Note that this is based on your device's time.",
            clock.now().format("%-I:%M:%S %p")
        ),
        RuleResponse::CurrentDate => {
            let now = clock.now();
            format!(
                "Today is {} ({}).",
                now.format("%-m/%-d/%Y"),
                now.format("%a %b %d %Y")
            )
        }
        RuleResponse::Joke => JOKES[jokes.pick(JOKES.len()) % JOKES.len()].to_string(),
    }
}
