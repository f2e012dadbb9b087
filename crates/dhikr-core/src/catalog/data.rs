//! Built-in Hisn al-Muslim categories.

use super::{Category, Entry};

pub(super) static CATEGORIES: &[Category] = &[
    Category {
        id: "waking",
        title: "أذكار الاستيقاظ",
        entries: &[
            Entry {
                id: "w1",
                text: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "w2",
                text: "لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ، وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ. سُبْحَانَ اللَّهِ، وَالْحَمْدُ لِلَّهِ، وَلاَ إِلَهَ إِلاَّ اللَّهُ، وَاللَّهُ أَكْبَرُ، وَلاَ حَوْلَ وَلاَ قُوَّةَ إِلاَّ بِاللَّهِ الْعَلِيِّ الْعَظِيمِ.",
                target: 1,
                virtue: Some("من قالها غُفِرَ له"),
            },
        ],
    },
    Category {
        id: "morning",
        title: "أذكار الصباح",
        entries: &[
            Entry {
                id: "m0",
                text: "أَعُوذُ بِاللهِ مِنْ الشَّيْطَانِ الرَّجِيمِ (اللَّهُ لاَ إِلَهَ إِلاَّ هُوَ الْحَيُّ الْقَيُّومُ...) [آية الكرسي]",
                target: 1,
                virtue: Some("من قالها حين يصبح أجير من الجن حتى يمسي"),
            },
            Entry {
                id: "m_ikhlas",
                text: "سورة الإخلاص",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "m_falaq",
                text: "سورة الفلق",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "m_nas",
                text: "سورة الناس",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "m1",
                text: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ...",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "m2",
                text: "اللَّهُمَّ بِكَ أَصْبَحْنَا وَبِكَ أَمْسَيْنَا وَبِكَ نَحْيَا وَبِكَ نَمُوتُ وَإِلَيْكَ النُّشُورُ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "m3",
                text: "اللَّهُمَّ أَنْتَ رَبِّي لاَ إِلَهَ إِلاَّ أَنْتَ، خَلَقْتَنِي وَأَنَا عَبْدُكَ، وَأَنَا عَلَى عَهْدِكَ وَوَعْدِكَ مَا اسْتَطَعْتُ، أَعُوذُ بِكَ مِنْ شَرِّ مَا صَنَعْتُ، أَبُوءُ لَكَ بِنِعْمَتِكَ عَلَيَّ، وَأَبُوءُ بِذَنْبِي فَاغْفِرْ لِي فَإِنَّهُ لاَ يَغْفِرُ الذُّنُوبَ إِلاَّ أَنْتَ.",
                target: 1,
                virtue: Some("سيد الاستغفار"),
            },
        ],
    },
    Category {
        id: "evening",
        title: "أذكار المساء",
        entries: &[
            Entry {
                id: "e0",
                text: "أَعُوذُ بِاللهِ مِنْ الشَّيْطَانِ الرَّجِيمِ (اللَّهُ لاَ إِلَهَ إِلاَّ هُوَ الْحَيُّ الْقَيُّومُ...) [آية الكرسي]",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "e_ikhlas",
                text: "سورة الإخلاص",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "e_falaq",
                text: "سورة الفلق",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "e_nas",
                text: "سورة الناس",
                target: 3,
                virtue: None,
            },
            Entry {
                id: "e1",
                text: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ...",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "sleep",
        title: "أذكار النوم",
        entries: &[
            Entry {
                id: "s1",
                text: "بِاسْمِكَ رَبِّي وَضَعْتُ جَنْبِي، وَبِكَ أَرْفَعُهُ، فَإِنْ أَمْسَكْتَ نَفْسِي فَارْحَمْهَا، وَإِنْ أَرْسَلْتَهَا فَاحْفَظْهَا بِمَا تَحْفَظُ بِهِ عِبَادَكَ الصَّالِحِينَ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "s4",
                text: "سُبْحَانَ اللَّهِ (33)، الْحَمْدُ لِلَّهِ (33)، اللَّهُ أَكْبَرُ (34)",
                target: 100,
                virtue: None,
            },
        ],
    },
    Category {
        id: "food",
        title: "الطعام والشراب",
        entries: &[
            Entry {
                id: "f1",
                text: "بِسْمِ اللَّهِ.",
                target: 1,
                virtue: Some("قبل الأكل"),
            },
            Entry {
                id: "f2",
                text: "اللَّهُمَّ بَارِكْ لَنَا فِيهِ وَأَطْعِمْنَا خَيْراً مِنْهُ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "f3",
                text: "الْحَمْدُ لِلَّهِ الَّذِي أَطْعَمَنِي هَذَا وَرَزَقَنِيهِ مِنْ غَيْرِ حَوْلٍ مِنِّي وَلاَ قُوَّةٍ.",
                target: 1,
                virtue: Some("بعد الفراغ من الطعام"),
            },
        ],
    },
    Category {
        id: "clothes",
        title: "لبس الثوب",
        entries: &[
            Entry {
                id: "c1",
                text: "الْحَمْدُ لِلَّهِ الَّذِي كَسَانِي هَذَا (الثَّوْبَ) وَرَزَقَنِيهِ مِنْ غَيْرِ حَوْلٍ مِنِّي وَلاَ قُوَّةٍ.",
                target: 1,
                virtue: Some("غُفر له ما تقدم من ذنبه"),
            },
        ],
    },
    Category {
        id: "toilet",
        title: "الخلاء",
        entries: &[
            Entry {
                id: "t1",
                text: "(بِسْمِ اللَّهِ) اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنَ الْخُبُثِ وَالْخَبَائِثِ.",
                target: 1,
                virtue: Some("عند الدخول"),
            },
            Entry {
                id: "t2",
                text: "غُفْرَانَكَ.",
                target: 1,
                virtue: Some("عند الخروج"),
            },
        ],
    },
    Category {
        id: "wudu",
        title: "الوضوء",
        entries: &[
            Entry {
                id: "wd1",
                text: "بِسْمِ اللَّهِ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "wd3",
                text: "اللَّهُمَّ اجْعَلْنِي مِنَ التَّوَّابِينَ وَاجْعَلْنِي مِنَ الْمُتَطَهِّرِينَ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "home",
        title: "المنزل",
        entries: &[
            Entry {
                id: "h1",
                text: "بِسْمِ اللَّهِ وَلَجْنَا، وَبِسْمِ اللَّهِ خَرَجْنَا، وَعَلَى رَبِّنَا تَوَكَّلْنَا.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "h2",
                text: "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "mosque",
        title: "المسجد",
        entries: &[
            Entry {
                id: "mq1",
                text: "اللَّهُمَّ اجْعَلْ فِي قَلْبِي نُوراً، وَفِي لِسَانِي نُوراً، وَاجْعَلْ فِي سَمْعِي نُوراً، وَاجْعَلْ فِي بَصَرِي نُوراً...",
                target: 1,
                virtue: Some("الذهاب للمسجد"),
            },
            Entry {
                id: "mq2",
                text: "اللَّهُمَّ افْتَحْ لِي أَبْوَابَ رَحْمَتِكَ.",
                target: 1,
                virtue: Some("دخول المسجد"),
            },
        ],
    },
    Category {
        id: "adhan",
        title: "الأذان",
        entries: &[
            Entry {
                id: "ad1",
                text: "يقول مثل ما يقول المؤذن إلا في \"حي على الصلاة وحي على الفلاح\" يقول \"لا حول ولا قوة إلا بالله\".",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "ad3",
                text: "اللَّهُمَّ رَبَّ هَذِهِ الدَّعْوَةِ التَّامَّةِ، وَالصَّلاَةِ الْقَائِمَةِ، آتِ مُحَمَّداً الْوَسِيلَةَ وَالْفَضِيلَةَ، وَابْعَثْهُ مَقَاماً مَحْمُوداً الَّذِي وَعَدْتَهُ، إِنَّكَ لاَ تُخْلِفُ الْمِيعَادَ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "prayer",
        title: "الصلاة (الاستفتاح)",
        entries: &[
            Entry {
                id: "ps1",
                text: "اللَّهُمَّ بَاعِدْ بَيْنِي وَبَيْنَ خَطَايَايَ كَمَا بَاعَدْتَ بَيْنَ الْمَشْرِقِ وَالْمَغْرِبِ، اللَّهُمَّ نَقِّنِي مِنْ خَطَايَايَ كَمَا يُنَقَّى الثَّوْبُ الأَبْيَضُ مِنَ الدَّنَسِ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "ps2",
                text: "سُبْحَانَكَ اللَّهُمَّ وَبِحَمْدِكَ، وَتَبَارَكَ اسْمُكَ، وَتَعَالَى جَدُّكَ، وَلاَ إِلَهَ غَيْرُكَ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "prayer_movements",
        title: "أذكار الصلاة",
        entries: &[
            Entry {
                id: "pm1",
                text: "سُبْحَانَ رَبِّيَ الْعَظِيمِ.",
                target: 3,
                virtue: Some("الركوع"),
            },
            Entry {
                id: "pm2",
                text: "سَمِعَ اللَّهُ لِمَنْ حَمِدَهُ.",
                target: 1,
                virtue: Some("الرفع من الركوع"),
            },
            Entry {
                id: "pm3",
                text: "سُبْحَانَ رَبِّيَ الأَعْلَى.",
                target: 3,
                virtue: Some("السجود"),
            },
            Entry {
                id: "pm4",
                text: "رَبِّ اغْفِرْ لِي، رَبِّ اغْفِرْ لِي.",
                target: 1,
                virtue: Some("بين السجدتين"),
            },
        ],
    },
    Category {
        id: "after_prayer",
        title: "بعد الصلاة",
        entries: &[
            Entry {
                id: "ap1",
                text: "أَسْتَغْفِرُ اللَّهَ (ثَلاَثاً) اللَّهُمَّ أَنْتَ السَّلاَمُ، وَمِنْكَ السَّلاَمُ، تَبَارَكْتَ يَا ذَا الْجَلاَلِ وَالإِكْرَامِ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "ap2",
                text: "سُبْحَانَ اللَّهِ (33)، الْحَمْدُ لِلَّهِ (33)، اللَّهُ أَكْبَرُ (33)، لاَ إِلَهَ إِلاَّ اللَّهُ وَحْدَهُ لاَ شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "worry",
        title: "الهم والحزن",
        entries: &[
            Entry {
                id: "wr1",
                text: "اللَّهُمَّ إِنِّي عَبْدُكَ، ابْنُ عَبْدِكَ، ابْنُ أَمَتِكَ، نَاصِيَتِي بِيَدِكَ، مَاضٍ فِيَّ حُكْمُكَ، عَدْلٌ فِيَّ قَضَاؤُكَ، أَسْأَلُكَ بِكُلِّ اسْمٍ هُوَ لَكَ سَمَّيْتَ بِهِ نَفْسَكَ، أَوْ أَنْزَلْتَهُ فِي كِتَابِكَ، أَوْ عَلَّمْتَهُ أَحَداً مِنْ خَلْقِكَ، أَوِ اسْتَأْثَرْتَ بِهِ فِي عِلْمِ الْغَيْبِ عِنْدَكَ، أَنْ تَجْعَلَ الْقُرْآنَ رَبِيعَ قَلْبِي، وَنُورَ صَدْرِي، وَجَلاَءَ حُزْنِي وَذَهَابَ هَمِّي.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "wr2",
                text: "اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنَ الْهَمِّ وَالْحَزَنِ، وَالْعَجْزِ وَالْكَسَلِ، وَالْبُخْلِ وَالْجُبْنِ، وَضَلَعِ الدَّيْنِ وَغَلَبَةِ الرِّجَالِ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "hajj",
        title: "الحج والعمرة",
        entries: &[
            Entry {
                id: "hj1",
                text: "لَبَّيْكَ اللَّهُمَّ عُمْرَةً.",
                target: 1,
                virtue: Some("عند الإحرام بالعمرة"),
            },
            Entry {
                id: "hj2",
                text: "لَبَّيْكَ اللَّهُمَّ لَبَّيْكَ، لَبَّيْكَ لاَ شَرِيكَ لَكَ لَبَّيْكَ، إِنَّ الْحَمْدَ وَالنِّعْمَةَ لَكَ وَالْمُلْكَ لاَ شَرِيكَ لَكَ.",
                target: 1,
                virtue: Some("التلبية"),
            },
            Entry {
                id: "hj3",
                text: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ.",
                target: 1,
                virtue: Some("بين الركن اليماني والحجر الأسود"),
            },
        ],
    },
    Category {
        id: "travel",
        title: "السفر",
        entries: &[
            Entry {
                id: "tr1",
                text: "اللَّهُ أَكْبَرُ، اللَّهُ أَكْبَرُ، اللَّهُ أَكْبَرُ، سُبْحَانَ الَّذِي سَخَّرَ لَنَا هَذَا وَمَا كُنَّا لَهُ مُقْرِنِينَ وَإِنَّا إِلَى رَبِّنَا لَمُنْقَلِبُونَ...",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "rain",
        title: "المطر والريح",
        entries: &[
            Entry {
                id: "rn1",
                text: "اللَّهُمَّ صَيِّباً نَافِعاً.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "rn2",
                text: "مُطِرْنَا بِفَضْلِ اللَّهِ وَرَحْمَتِهِ.",
                target: 1,
                virtue: None,
            },
        ],
    },
    Category {
        id: "sick",
        title: "عيادة المريض",
        entries: &[
            Entry {
                id: "sk1",
                text: "لاَ بَأْسَ طَهُورٌ إِنْ شَاءَ اللَّهُ.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "sk2",
                text: "أَسْأَلُ اللَّهَ الْعَظِيمَ رَبَّ الْعَرْشِ الْعَظِيمِ أَنْ يَشْفِيَكَ.",
                target: 7,
                virtue: None,
            },
        ],
    },
    Category {
        id: "funeral",
        title: "الجنائز",
        entries: &[
            Entry {
                id: "fn1",
                text: "إِنَّا لِلَّهِ وَإِنَّا إِلَيْهِ رَاجِعُونَ، اللَّهُمَّ أْجُرْنِي فِي مُصِيبَتِي وَأَخْلِفْ لِي خَيْراً مِنْهَا.",
                target: 1,
                virtue: None,
            },
            Entry {
                id: "fn2",
                text: "اللَّهُمَّ اغْفِرْ لَهُ وَارْحَمْهُ، وَعَافِهِ، وَاعْفُ عَنْهُ، وَأَكْرِمْ نُزُلَهُ، وَوَسِّعْ مُدْخَلَهُ...",
                target: 1,
                virtue: Some("الدعاء للميت"),
            },
        ],
    },
    Category {
        id: "greeting",
        title: "السلام",
        entries: &[
            Entry {
                id: "gr1",
                text: "السَّلاَمُ عَلَيْكُمْ وَرَحْمَةُ اللَّهِ وَبَرَكَاتُهُ.",
                target: 1,
                virtue: None,
            },
        ],
    },
];
