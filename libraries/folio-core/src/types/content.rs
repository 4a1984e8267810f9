//! Bilingual editable site content
//!
//! One `ContentRecord` per language. Every field is editable from the
//! admin surface; missing fields in persisted/imported data fall back to
//! the seeded defaults rather than failing the load.

use serde::{Deserialize, Serialize};

/// Site language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Bangla
    Bn,
}

impl Language {
    /// Short language code as used in persisted records ("en"/"bn")
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }
}

/// Editable text content for one language
///
/// Field names mirror the exported JSON document, so the whole record
/// round-trips through export/import unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRecord {
    /// Brand/wordmark shown in the navbar and footer
    pub brand_name: String,

    /// Hero headline
    pub title: String,

    /// Hero description paragraph
    pub desc: String,

    /// Primary call-to-action label
    pub work: String,

    /// Secondary call-to-action label
    pub contact: String,

    /// Stat card labels (figures are fixed, labels are editable)
    pub stat1: String,
    pub stat2: String,
    pub stat3: String,

    /// Projects section title
    pub projects_title: String,

    /// Life-journey section title
    pub life_story_title: String,

    // Life-journey text blocks
    pub roots_title: String,
    pub roots_content: String,
    pub childhood_title: String,
    pub childhood_content: String,
    pub education_title: String,
    pub education_content: String,
    pub hobbies_title: String,
    pub hobbies_content: String,
    pub friends_title: String,
    pub friends_content: String,
    pub area_title: String,
    pub area_content: String,

    /// Social section title
    pub social_title: String,

    // Bio personalizer panel labels
    pub personalize_title: String,
    pub personalize_desc: String,
    /// Placeholder for the visitor's role input
    pub placeholder: String,
    pub generate_btn: String,
    /// Label shown while a rewrite request is in flight
    pub loading: String,

    /// Availability indicator toggled from the editor
    pub is_online: bool,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self::seeded_en()
    }
}

impl ContentRecord {
    /// Seeded English content
    pub fn seeded_en() -> Self {
        Self {
            brand_name: "ASHRAFUL KHAN".to_string(),
            title: "Hi, I'm a Developer".to_string(),
            desc: "I build modern, high-performance web applications with a focus on \
                   user experience and clean code."
                .to_string(),
            work: "View Projects".to_string(),
            contact: "Contact Me".to_string(),
            stat1: "Years Experience".to_string(),
            stat2: "Projects Completed".to_string(),
            stat3: "Happy Clients".to_string(),
            projects_title: "Selected Projects".to_string(),
            life_story_title: "My Personal Journey".to_string(),
            roots_title: "Farmgate, Dhaka: The Birthplace".to_string(),
            roots_content: "This is where my world began. Amidst the vibrant chaos and the \
                            endless energy of Farmgate, I found my first inspiration to create."
                .to_string(),
            childhood_title: "Golden Childhood".to_string(),
            childhood_content: "Climbing trees and chasing rain - my childhood was an adventure \
                                that sparked my imagination."
                .to_string(),
            education_title: "The Learning Era".to_string(),
            education_content: "Academic life was a bridge between my curiosity and my \
                                professional calling in technology."
                .to_string(),
            hobbies_title: "Sports & Passion".to_string(),
            hobbies_content: "The football field is where I recharge. It taught me teamwork, \
                              strategy, and resilience."
                .to_string(),
            friends_title: "The Tribe".to_string(),
            friends_content: "My friends are my second family. We've grown from dreamers to \
                              achievers together."
                .to_string(),
            area_title: "Local Life".to_string(),
            area_content: "My current neighborhood is a blend of bustling markets and quiet \
                           libraries."
                .to_string(),
            social_title: "Connect With Me".to_string(),
            personalize_title: "AI Bio Personalizer".to_string(),
            personalize_desc: "Let Gemini rewrite your professional intro based on your \
                               specific role."
                .to_string(),
            placeholder: "e.g., Fullstack Engineer, UI/UX Enthusiast...".to_string(),
            generate_btn: "Magic Rewrite".to_string(),
            loading: "Thinking...".to_string(),
            is_online: true,
        }
    }

    /// Seeded Bangla content
    pub fn seeded_bn() -> Self {
        Self {
            brand_name: "আশরাফুল ইসলাম".to_string(),
            title: "হ্যালো, আমি একজন ডেভেলপার".to_string(),
            desc: "আমি আধুনিক এবং উচ্চ-ক্ষমতাসম্পন্ন ওয়েব অ্যাপ্লিকেশন তৈরি করি।".to_string(),
            work: "প্রজেক্ট দেখুন".to_string(),
            contact: "যোগাযোগ করুন".to_string(),
            stat1: "বছরের অভিজ্ঞতা".to_string(),
            stat2: "সম্পন্ন প্রজেক্ট".to_string(),
            stat3: "সন্তুষ্ট ক্লায়েন্ট".to_string(),
            projects_title: "নির্বাচিত প্রজেক্টসমূহ".to_string(),
            life_story_title: "আমার ব্যক্তিগত গল্প".to_string(),
            roots_title: "ফার্মগেট, ঢাকা: আমার শেকড়".to_string(),
            roots_content: "এখান থেকেই আমার পৃথিবীর শুরু।".to_string(),
            childhood_title: "সোনালী শৈশব".to_string(),
            childhood_content: "গাছে ওঠা আর বৃষ্টির পেছনে ছোটা - আমার শৈশব ছিল এক অ্যাডভেঞ্চার।".to_string(),
            education_title: "শিক্ষা জীবন".to_string(),
            education_content: "শিক্ষা জীবন ছিল আমার কৌতূহল এবং প্রযুক্তির মধ্যকার সেতুবন্ধন।".to_string(),
            hobbies_title: "খেলাধুলা ও আবেগ".to_string(),
            hobbies_content: "ফুটবল মাঠ আমার শক্তি সঞ্চয়ের জায়গা।".to_string(),
            friends_title: "বন্ধুত্বের বন্ধন".to_string(),
            friends_content: "আমার বন্ধুরা আমার দ্বিতীয় পরিবার।".to_string(),
            area_title: "আমার এলাকা".to_string(),
            area_content: "আমার এলাকাটি বাজার আর লাইব্রেরির এক সংমিশ্রণ।".to_string(),
            social_title: "যোগাযোগ করুন".to_string(),
            personalize_title: "এআই বায়ো পার্সোনালাইজার".to_string(),
            personalize_desc: "জেমিনির মাধ্যমে আপনার ভূমিকার ভিত্তিতে একটি চমৎকার প্রফেশনাল ইন্ট্রো তৈরি করুন।"
                .to_string(),
            placeholder: "যেমন: ফুলস্ট্যাক ইঞ্জিনিয়ার, ইউআই/ইউএক্স উৎসাহী...".to_string(),
            generate_btn: "ম্যাজিক রিরাইট".to_string(),
            loading: "ভাবছি...".to_string(),
            is_online: true,
        }
    }
}

/// A generated hero rewrite
///
/// Overlays the hero `title`/`desc` for the current visitor only; the
/// stored [`ContentRecord`] is never modified by applying one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBio {
    /// Replacement hero headline
    pub title: String,
    /// Replacement hero description
    pub desc: String,
}

/// Per-language content records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedContent {
    /// English record
    pub en: ContentRecord,
    /// Bangla record
    pub bn: ContentRecord,
}

impl Default for LocalizedContent {
    fn default() -> Self {
        Self {
            en: ContentRecord::seeded_en(),
            bn: ContentRecord::seeded_bn(),
        }
    }
}

impl LocalizedContent {
    /// Record for a language
    pub fn get(&self, language: Language) -> &ContentRecord {
        match language {
            Language::En => &self.en,
            Language::Bn => &self.bn,
        }
    }

    /// Mutable record for a language
    pub fn get_mut(&mut self, language: Language) -> &mut ContentRecord {
        match language {
            Language::En => &mut self.en,
            Language::Bn => &mut self.bn,
        }
    }
}
