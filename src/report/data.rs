//! Static content of the functional test report.
//!
//! Step tables are stored as rows of cells in the order of
//! [`STEP_HEADER`]; their arity is checked when the tables are formatted.

/// Header row of every step table.
pub const STEP_HEADER: [&str; 5] = ["N°", "Action", "Résultat attendu", "Résultat\nobtenu", "Commentaires"];

/// Header row of the summary table.
pub const SUMMARY_HEADER: [&str; 4] = ["Partie testée", "Nombre tests", "Réussis", "Remarques"];

/// Marker written in the "obtained result" column of a passed step.
pub const PASSED: &str = "✅ OK";

/// Report date, as printed on the title page.
pub const REPORT_DATE: &str = "24/11/2025";

/// Testers, with their student numbers.
pub const TESTERS: [(&str, &str); 3] = [
    ("Aziz TLILI", "41006201"),
    ("Maissara FERKOUS", "42006149"),
    ("Doan Thi Mai Chi", "40016084"),
];

/// One scripted test: a title and its steps.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Sub-section heading, e.g. "Test 1.1 : ..."
    pub title: &'static str,
    /// Step rows, without the header
    pub steps: &'static [&'static [&'static str]],
}

impl TestCase {
    /// Whether every step was marked as passed.
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|step| step.get(3).is_some_and(|cell| *cell == PASSED))
    }
}

/// A numbered section of the report.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section heading
    pub heading: &'static str,
    /// Introduction paragraph
    pub intro: &'static str,
    /// Tests of the section, in order
    pub tests: &'static [TestCase],
    /// Label of the section in the summary table
    pub summary_label: &'static str,
    /// Remark of the section in the summary table
    pub summary_remark: &'static str,
    /// Whether a page break follows the section
    pub page_break_after: bool,
}

/// Environment details listed under "Infos Tests" as (label, value).
pub const TEST_ENVIRONMENT: [(&str, &str); 5] = [
    ("Navigateurs", "Chrome, Firefox"),
    ("OS", "Windows 11, Ubuntu"),
    ("Écrans", "PC 1920x1080, portable 1366x768, mobile"),
    ("Testé le", REPORT_DATE),
    ("Par", "Aziz TLILI, Maissara FERKOUS, Doan Thi Mai Chi"),
];

/// Closing paragraph, with `<br/>` separating its parts.
pub const CONCLUSION: &str = "J'ai testé toutes les fonctionnalités de l'application et tout marche bien. \
    Chaque utilisateur peut gérer ses propres abonnements après s'être inscrit et connecté. \
    Les stats sont correctes, l'import/export JSON fonctionne, le chatbot répond bien aux questions.<br/><br/>\
    J'ai aussi vérifié que ça marche sur mobile et c'est bien adapté. Pas de bugs trouvés pendant mes tests.<br/><br/>\
    L'interface est claire et assez simple à utiliser, les messages d'erreur aident quand on fait une erreur. \
    Le système de confirmation par email empêche les faux comptes.<br/><br/>\
    Globalement le projet remplit bien le cahier des charges.";

/// The eight test sections, in document order.
pub const SECTIONS: &[Section] = &[
    Section {
        heading: "1. Tests Connexion / Inscription",
        intro: "Cette section teste le système d'authentification de l'application. \
            L'authentification permet aux utilisateurs de créer un compte personnel (inscription) et \
            de se connecter pour accéder à leurs données. Chaque utilisateur a son propre espace où il peut \
            gérer ses abonnements en toute sécurité. Les champs testés incluent l'email (adresse mail unique), \
            le mot de passe (code secret pour protéger le compte), et le pseudo (nom d'affichage). \
            Le système envoie aussi un email de confirmation pour vérifier que l'adresse mail est valide.",
        tests: &[
            TestCase {
                title: "Test 1.1 : Se connecter avec un compte qui existe",
                steps: &[
                    &["1", "J'ouvre la page\nlogin.html", "La page de connexion\ns'affiche", PASSED, "y'a bien le\nformulaire"],
                    &["2", "Je tape test@example.com\net le mot de passe", "Ça écrit dans\nles champs", PASSED, "-"],
                    &["3", "Je clique sur\n\"Se connecter\"", "Ça me redirige vers\nla page d'accueil", PASSED, "assez rapide"],
                    &["4", "Je regarde en haut\nà droite", "Mon pseudo s'affiche à la\nplace du bouton connexion", PASSED, "cool, ça marche"],
                ],
            },
            TestCase {
                title: "Test 1.2 : Se connecter avec mauvais mot de passe",
                steps: &[
                    &["1", "J'ouvre login.html", "Page de connexion", PASSED, "-"],
                    &["2", "Je mets un email correct\nmais mauvais mdp", "Les champs acceptent", PASSED, "-"],
                    &["3", "Je clique sur\n\"Se connecter\"", "Message d'erreur qui dit\nque c'est pas bon", PASSED, "message rouge"],
                    &["4", "Je vérifie", "Je reste sur la page", PASSED, "normal"],
                ],
            },
            TestCase {
                title: "Test 1.3 : Se connecter sans avoir confirmé l'email",
                steps: &[
                    &["1", "Je crée un compte", "Compte créé", PASSED, "j'ai reçu l'email"],
                    &["2", "J'essaie de me\nconnecter direct", "Message qui dit de\nconfirmer l'email", PASSED, "logique"],
                    &["3", "Je clique sur le lien\ndans l'email", "Compte confirmé", PASSED, "-"],
                    &["4", "Je retente la connexion", "Cette fois ça marche", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 1.4 : Créer un nouveau compte",
                steps: &[
                    &["1", "Je clique sur \"S'inscrire\"\nsur la home", "Page register.html\ns'ouvre", PASSED, "-"],
                    &["2", "Je remplis le pseudo\n\"JeanTest\"", "Le champ accepte", PASSED, "-"],
                    &["3", "Je mets mon email\njean.test@mail.com", "Ça marche", PASSED, "-"],
                    &["4", "Je tape le mot de\npasse 2 fois", "Les 2 champs sont\nremplis", PASSED, "-"],
                    &["5", "Je clique \"Créer\nmon compte\"", "Message de succès +\nemail envoyé", PASSED, "nickel"],
                ],
            },
            TestCase {
                title: "Test 1.5 : S'inscrire avec un email déjà pris",
                steps: &[
                    &["1", "J'ouvre register.html", "Formulaire d'inscription", PASSED, "-"],
                    &["2", "Je mets test@example.com\n(déjà utilisé)", "Le champ accepte", PASSED, "-"],
                    &["3", "Je remplis le reste\net je valide", "Message d'erreur\n\"Email déjà utilisé\"", PASSED, "ça bloque bien"],
                    &["4", "Je vérifie", "Je reste sur la page\npour réessayer", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 1.6 : S'inscrire avec mdp différents",
                steps: &[
                    &["1", "Je remplis le formulaire", "Tout s'écrit normalement", PASSED, "-"],
                    &["2", "Je tape \"Pass123\"\ndans mot de passe", "OK", PASSED, "-"],
                    &["3", "Je tape \"Pass456\"\ndans confirmation", "OK", PASSED, "-"],
                    &["4", "Je clique \"Créer\nmon compte\"", "Message \"Les mots de passe\ncorrespondent pas\"", PASSED, "validation faite"],
                ],
            },
        ],
        summary_label: "Connexion/Inscription",
        summary_remark: "RAS",
        page_break_after: true,
    },
    Section {
        heading: "2. Tests Gestion des Abonnements",
        intro: "Cette section teste les fonctionnalités principales de l'application : la gestion des abonnements. \
            Un abonnement représente un service payant auquel on est inscrit (comme Netflix, Spotify, etc.). \
            Les champs incluent : le nom du service (ex: Netflix), la date de début (quand on a commencé l'abonnement), \
            la date de fin (quand il se termine), le prix mensuel (combien ça coûte par mois), et la catégorie \
            (type de service : Streaming, Sport, etc.). L'application permet d'ajouter de nouveaux abonnements, \
            de modifier les informations existantes, de supprimer ceux qu'on n'utilise plus, et de marquer \
            quand on les a utilisés récemment. Les statistiques en haut (Total, Actifs, Coût) se mettent à jour \
            automatiquement à chaque modification.",
        tests: &[
            TestCase {
                title: "Test 2.1 : Ajouter un abonnement",
                steps: &[
                    &["1", "Je me connecte et j'ouvre\nle dashboard", "Le dashboard s'affiche", PASSED, "formulaire sur\nla droite"],
                    &["2", "Je mets \"Netflix\" dans\nnom du service", "Ça s'écrit", PASSED, "-"],
                    &["3", "Je choisis 01/01/2025\ncomme date début", "Le calendrier s'ouvre\net je sélectionne", PASSED, "pratique"],
                    &["4", "Je mets 01/01/2026\npour la fin", "Date acceptée", PASSED, "-"],
                    &["5", "Je tape 13.99\ndans le prix", "Ça prend le chiffre", PASSED, "avec virgule"],
                    &["6", "Je choisis \"Streaming\"\ndans la catégorie", "Menu déroulant OK", PASSED, "-"],
                    &["7", "Je clique \"Ajouter\nle service\"", "Message de succès", PASSED, "-"],
                    &["8", "Je regarde la liste", "La carte Netflix\napparait", PASSED, "badge vert\n\"Actif\""],
                    &["9", "Je vérifie les stats\nen haut", "Total: 1, Actifs: 1,\nCoût: 13.99€", PASSED, "ça se met à\njour tout seul"],
                ],
            },
            TestCase {
                title: "Test 2.2 : Essayer d'ajouter sans être connecté",
                steps: &[
                    &["1", "J'ouvre index.html sans\nme connecter", "La page s'affiche", PASSED, "-"],
                    &["2", "Je remplis le formulaire\nd'ajout", "Les champs acceptent", PASSED, "-"],
                    &["3", "Je clique \"Ajouter\"", "Message d'erreur que je\ndois me connecter", PASSED, "bien protégé"],
                    &["4", "J'attends un peu", "Ça me redirige vers\nlogin.html", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 2.3 : Modifier un abonnement existant",
                steps: &[
                    &["1", "J'ai déjà un abonnement\ndans la liste", "Liste visible avec\nicone modifier", PASSED, "-"],
                    &["2", "Je clique sur l'icône\ncrayon", "Une fenêtre s'ouvre\navec les infos", PASSED, "popup de\nmodification"],
                    &["3", "Je change le prix de\n13.99 à 15.99", "Le champ accepte", PASSED, "-"],
                    &["4", "Je clique \"Enregistrer\"", "La fenêtre se ferme +\nmessage succès", PASSED, "-"],
                    &["5", "Je regarde la carte", "Le nouveau prix\n15.99€ est là", PASSED, "changement\ndirect"],
                    &["6", "Je check les stats", "Le coût total a\nchangé aussi", PASSED, "recalculé\nautomatiquement"],
                ],
            },
            TestCase {
                title: "Test 2.4 : Supprimer un abonnement",
                steps: &[
                    &["1", "Je clique sur la poubelle\nd'un abonnement", "Popup qui demande si\nje suis sûr", PASSED, "pour éviter\nles erreurs"],
                    &["2", "Je clique \"Annuler\"", "Le popup se ferme,\nl'abonnement est toujours là", PASSED, "-"],
                    &["3", "Je reclique sur\nla poubelle", "Le popup revient", PASSED, "-"],
                    &["4", "Cette fois je clique\n\"Confirmer\"", "Message que c'est\nsupprimé", PASSED, "-"],
                    &["5", "Je regarde", "La carte a disparu", PASSED, "-"],
                    &["6", "Je vérifie les stats", "Total et coût\nont baissé", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 2.5 : Marquer un abonnement comme utilisé",
                steps: &[
                    &["1", "Je clique \"Marquer comme\nutilisé\" sur une carte", "Le bouton change", PASSED, "retour visuel"],
                    &["2", "Je regarde la carte", "Badge vert \"Utilisé\naujourd'hui\" apparait", PASSED, "avec la date\ndu jour"],
                    &["3", "Je refresh la page", "Le badge est\nencore là", PASSED, "c'est sauvegardé"],
                    &["4", "Je simule 30 jours après", "Badge alerte \"Inactif\ndepuis 30j\"", PASSED, "prévient\nl'inactivité"],
                ],
            },
        ],
        summary_label: "Gestion abonnements",
        summary_remark: "tout fonctionne",
        page_break_after: true,
    },
    Section {
        heading: "3. Tests Recherche et Filtres",
        intro: "Cette section teste la fonction de recherche qui permet de trouver rapidement un abonnement \
            parmi tous ceux qu'on a enregistrés. La barre de recherche est un champ de texte où on peut taper \
            le nom d'un service (ou une partie du nom) et l'application affiche uniquement les abonnements \
            correspondants en temps réel. Par exemple, si on tape \"net\", seuls les services contenant \"net\" \
            dans leur nom s'affichent. C'est très pratique quand on a beaucoup d'abonnements et qu'on cherche \
            un service précis.",
        tests: &[
            TestCase {
                title: "Test 3.1 : Rechercher un service par nom",
                steps: &[
                    &["1", "J'ai Netflix, Spotify\net Disney+", "Les 3 sont affichés", PASSED, "-"],
                    &["2", "Je clique dans la barre\nde recherche", "Le champ devient actif", PASSED, "-"],
                    &["3", "Je tape \"net\"", "Y'a que Netflix\nqui reste", PASSED, "filtre en direct"],
                    &["4", "Je continue \"netflix\"", "Toujours juste Netflix", PASSED, "majuscule/minuscule\npareil"],
                    &["5", "J'efface tout", "Les 3 abonnements\nreviennent", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 3.2 : Chercher quelque chose qui existe pas",
                steps: &[
                    &["1", "Je tape \"xyz123\" dans\nla recherche", "Aucune carte", PASSED, "-"],
                    &["2", "Je regarde", "Message \"Aucun abonnement\ntrouvé\"", PASSED, "-"],
                    &["3", "Je check les stats", "Toujours les bonnes\nvaleurs", PASSED, "pas impacté par\nla recherche"],
                ],
            },
        ],
        summary_label: "Recherche",
        summary_remark: "OK",
        page_break_after: false,
    },
    Section {
        heading: "4. Tests Import / Export",
        intro: "Cette section teste les fonctionnalités d'import et export de données. L'export permet \
            de sauvegarder tous ses abonnements dans un fichier JSON (format texte structuré lisible par ordinateur) \
            qu'on peut télécharger sur son ordinateur. C'est utile pour faire une sauvegarde de ses données. \
            L'import fait l'inverse : il permet de charger un fichier JSON contenant des abonnements pour les \
            ajouter dans l'application. Ces fonctions sont pratiques pour transférer ses données d'un ordinateur \
            à un autre, ou pour restaurer une sauvegarde. Le système vérifie que le fichier est au bon format \
            avant de l'importer.",
        tests: &[
            TestCase {
                title: "Test 4.1 : Exporter mes abonnements en JSON",
                steps: &[
                    &["1", "J'ai créé plusieurs\nabonnements", "Ils sont tous dans\nla liste", PASSED, "-"],
                    &["2", "Je clique \"Exporter JSON\"", "Un fichier se télécharge", PASSED, "-"],
                    &["3", "J'ouvre le fichier", "C'est un fichier .json", PASSED, "format correct"],
                    &["4", "Je regarde dedans", "Tous mes abonnements\nsont là", PASSED, "avec toutes\nles infos"],
                    &["5", "Je vérifie", "Format tableau JSON\navec des objets", PASSED, "id, nomService,\ndates, prix..."],
                ],
            },
            TestCase {
                title: "Test 4.2 : Importer un fichier JSON",
                steps: &[
                    &["1", "Je clique \"Importer JSON\"", "Sélecteur de fichier", PASSED, "-"],
                    &["2", "Je choisis mon\nfichier JSON", "Le fichier est accepté", PASSED, "-"],
                    &["3", "J'attends", "Y'a un truc qui tourne", PASSED, "chargement"],
                    &["4", "Résultat", "Message \"X abonnements\nimportés\"", PASSED, "X = le vrai\nnombre"],
                    &["5", "Je regarde ma liste", "Les nouveaux sont\najoutés", PASSED, "pas de doublons"],
                    &["6", "Je vérifie stats", "Tout est recalculé", PASSED, "-"],
                ],
            },
            TestCase {
                title: "Test 4.3 : Importer un mauvais fichier",
                steps: &[
                    &["1", "Je clique \"Importer JSON\"", "Sélecteur s'ouvre", PASSED, "-"],
                    &["2", "Je choisis un fichier .txt", "Fichier rejeté", PASSED, "vérifie\nl'extension"],
                    &["3", "J'essaie avec un\nJSON cassé", "Message d'erreur\n\"Format invalide\"", PASSED, "bien géré"],
                ],
            },
        ],
        summary_label: "Import/Export",
        summary_remark: "OK",
        page_break_after: true,
    },
    Section {
        heading: "5. Tests Dashboard Statistiques",
        intro: "Cette section teste le tableau de bord (dashboard) qui affiche des statistiques visuelles \
            sur nos abonnements. En haut, 4 cartes montrent : le nombre total d'abonnements, combien sont actifs \
            actuellement, le coût mensuel total, et le nombre d'alertes (abonnements non utilisés depuis longtemps). \
            Les graphiques en dessous visualisent ces données : un graphique rond (donut) montre la répartition \
            par catégorie (combien on a d'abonnements Streaming, Sport, etc.), et un graphique en barres montre \
            l'évolution du coût mois par mois. Ces graphiques sont interactifs : quand on passe la souris dessus, \
            on voit plus de détails.",
        tests: &[
            TestCase {
                title: "Test 5.1 : Voir les graphiques",
                steps: &[
                    &["1", "Je clique sur \"Dashboard\"\nen haut", "Page stats.html s'ouvre", PASSED, "assez rapide"],
                    &["2", "Je regarde les stats\nen haut", "4 cartes : Total, Actifs,\nCoût, Alertes", PASSED, "bons chiffres"],
                    &["3", "Je check le graphique\nrond", "Graphique coloré avec\nles catégories", PASSED, "joli"],
                    &["4", "Je regarde le graphique\nen barres", "Évolution du coût\npar mois", PASSED, "avec les axes"],
                    &["5", "Je passe la souris\ndessus", "Infos détaillées qui\ns'affichent", PASSED, "interactif cool"],
                ],
            },
            TestCase {
                title: "Test 5.2 : Dashboard quand j'ai rien",
                steps: &[
                    &["1", "Nouveau compte vide", "Je peux quand même\naccéder", PASSED, "-"],
                    &["2", "Je regarde les stats", "Tout à zéro", PASSED, "0 abonnements, 0€"],
                    &["3", "Je check les graphiques", "Message \"Aucune donnée\"", PASSED, "pas d'erreur"],
                ],
            },
        ],
        summary_label: "Dashboard",
        summary_remark: "graphiques niquel",
        page_break_after: false,
    },
    Section {
        heading: "6. Tests Chatbot",
        intro: "Cette section teste le chatbot, un assistant virtuel qui répond aux questions en langage \
            naturel. Le chatbot s'ouvre en cliquant sur une icône en bas à droite de la page. On peut lui poser \
            des questions comme \"Quel est mon budget ?\" ou \"Cherche Netflix\" et il répond avec les informations \
            correspondantes. C'est une façon plus naturelle et conversationnelle d'interagir avec l'application, \
            sans avoir à naviguer dans les menus. Le chatbot comprend le français et peut fournir des informations \
            sur nos abonnements, notre budget, ou nos alertes.",
        tests: &[
            TestCase {
                title: "Test 6.1 : Utiliser le chatbot",
                steps: &[
                    &["1", "Je clique sur l'icône chatbot\nen bas à droite", "La fenêtre s'ouvre", PASSED, "animation sympa"],
                    &["2", "Je tape \"Bonjour\"", "Le bot répond", PASSED, "rapide"],
                    &["3", "Je demande \"Quel est\nmon budget ?\"", "Il me donne le\ncoût mensuel", PASSED, "calcul juste"],
                    &["4", "Je tape \"Mes abonnements\nactifs\"", "Liste des abonnements\nactifs", PASSED, "bien présenté"],
                ],
            },
            TestCase {
                title: "Test 6.2 : Chercher via le chatbot",
                steps: &[
                    &["1", "J'ouvre le chatbot", "Fenêtre visible", PASSED, "-"],
                    &["2", "Je tape \"Cherche Netflix\"", "Il me donne les détails\nde Netflix", PASSED, "comprend bien"],
                    &["3", "Je demande \"Mes alertes\"", "Liste des trucs\ninactifs", PASSED, "-"],
                ],
            },
        ],
        summary_label: "Chatbot",
        summary_remark: "réponses correctes",
        page_break_after: false,
    },
    Section {
        heading: "7. Test Déconnexion",
        intro: "Cette section teste la fonction de déconnexion qui permet de terminer sa session et \
            de fermer l'accès à son compte. Quand on se déconnecte, on retourne à la page d'accueil publique \
            et notre pseudo (nom d'affichage) disparaît de la barre de navigation. C'est important pour la sécurité, \
            surtout si on utilise un ordinateur partagé : personne d'autre ne peut accéder à nos données personnelles \
            après qu'on se soit déconnecté. Il faut se reconnecter avec son email et mot de passe pour retrouver \
            l'accès à ses abonnements.",
        tests: &[TestCase {
            title: "Test 7.1 : Me déconnecter",
            steps: &[
                &["1", "Je suis connecté, je clique\n\"Déconnexion\"", "Déconnexion", PASSED, "direct"],
                &["2", "Je regarde où je suis", "Retour à home.html", PASSED, "-"],
                &["3", "Je check la navbar", "Boutons \"Se connecter\" et\n\"S'inscrire\" de retour", PASSED, "pseudo parti"],
                &["4", "J'essaie d'aller au\ndashboard", "Je vois plus mes\ntrucs persos", PASSED, "session terminée"],
            ],
        }],
        summary_label: "Déconnexion",
        summary_remark: "OK",
        page_break_after: false,
    },
    Section {
        heading: "8. Test Responsive (Mobile)",
        intro: "Cette section teste l'adaptabilité de l'application sur différents appareils, notamment \
            les smartphones et tablettes. Le terme \"responsive\" signifie que l'interface s'adapte automatiquement \
            à la taille de l'écran. Sur mobile, le menu se transforme en menu \"burger\" (trois lignes horizontales), \
            les cartes d'abonnements s'empilent verticalement (une par ligne au lieu de plusieurs côte à côte), \
            et les formulaires se repositionnent pour être facilement utilisables avec le doigt. Les graphiques \
            se redimensionnent aussi pour rester lisibles sur petit écran. Cela permet d'utiliser l'application \
            confortablement depuis n'importe quel appareil.",
        tests: &[TestCase {
            title: "Test 8.1 : Ouvrir sur téléphone",
            steps: &[
                &["1", "J'ouvre l'appli sur\nmon tel", "Tout s'adapte", PASSED, "menu burger"],
                &["2", "Je regarde les cartes", "Empilées les unes sur\nles autres", PASSED, "1 par ligne"],
                &["3", "Je check le formulaire", "En dessous de la liste", PASSED, "bien placé"],
                &["4", "Les graphiques", "Bien redimensionnés", PASSED, "-"],
            ],
        }],
        summary_label: "Mobile",
        summary_remark: "responsive impec",
        page_break_after: true,
    },
];
