/// Languages whose locale files receive the full categories section.
pub const TARGET_LANGS: &[&str] = &["fr", "de", "pt-BR", "zh-CN", "ja", "hi", "ru", "ar"];

/// English reference labels for every spending, investment and income
/// category of the app.
pub const REFERENCE: &[(&str, &str)] = &[
    ("groceries", "Groceries"),
    ("diningout", "Dining Out"),
    ("rent", "Rent"),
    ("fuel", "Fuel"),
    ("transport", "Transport"),
    ("shopping", "Shopping"),
    ("utilities", "Utilities"),
    ("mobilerecharge", "Mobile Recharge"),
    ("internet", "Internet"),
    ("electricity", "Electricity"),
    ("water", "Water"),
    ("gas", "Gas"),
    ("billsemi", "Bills & EMI"),
    ("loanpayment", "Loan Payment"),
    ("insurance", "Insurance"),
    ("subscriptions", "Subscriptions"),
    ("onlineorders", "Online Orders"),
    ("healthcare", "Healthcare"),
    ("doctor", "Doctor"),
    ("hospital", "Hospital"),
    ("medicine", "Medicine"),
    ("education", "Education"),
    ("schoolfees", "School Fees"),
    ("kids", "Kids"),
    ("babyessentials", "Baby Essentials"),
    ("daycare", "Daycare"),
    ("entertainment", "Entertainment"),
    ("movies", "Movies"),
    ("travel", "Travel"),
    ("taxicab", "Taxi / Cab"),
    ("parking", "Parking"),
    ("tolls", "Tolls"),
    ("vehicleservice", "Vehicle Service"),
    ("vehicleinsurance", "Vehicle Insurance"),
    ("carwash", "Car Wash"),
    ("homerepairs", "Home Repairs"),
    ("furniture", "Furniture"),
    ("appliances", "Appliances"),
    ("householditems", "Household Items"),
    ("homeservicesmaid", "Home Services / Maid"),
    ("maidsalary", "Maid Salary"),
    ("familysupport", "Family Support"),
    ("gifts", "Gifts"),
    ("charitydonations", "Charity / Donations"),
    ("partiesevents", "Parties / Events"),
    ("beautysalon", "Beauty & Salon"),
    ("personalcare", "Personal Care"),
    ("laundry", "Laundry"),
    ("stationery", "Stationery"),
    ("courierpostage", "Courier / Postage"),
    ("pets", "Pets"),
    ("vet", "Vet"),
    ("bankfees", "Bank Fees"),
    ("latefeespenalties", "Late Fees / Penalties"),
    ("others", "Others"),
    ("savings", "Savings"),
    ("mutualfundssip", "Mutual Funds / SIP"),
    ("cryptoinvestment", "Crypto Investment"),
    ("emergencyfund", "Emergency Fund"),
    ("stocks", "Stocks"),
    ("bonds", "Bonds"),
    ("realestate", "Real Estate"),
    ("cryptocurrency", "Cryptocurrency"),
    ("etfs", "ETFs"),
    ("commodities", "Commodities"),
    ("fixeddeposit", "Fixed Deposit"),
    ("gold", "Gold"),
    ("reits", "REITs"),
    ("npsretirementfund", "NPS / Retirement Fund"),
    ("insuranceinvestmentplans", "Insurance Investment Plans"),
    ("p2plending", "P2P Lending"),
    ("roboadvisors", "Robo-Advisors"),
    ("startupangelinvestment", "Startup / Angel Investment"),
    ("options", "Options"),
    ("futures", "Futures"),
    ("salary", "Salary"),
    ("businessincome", "Business Income"),
    ("freelance", "Freelance"),
    ("parttimejob", "Part-time Job"),
    ("rentalincome", "Rental Income"),
    ("interestincome", "Interest Income"),
    ("investmentreturns", "Investment Returns"),
    ("cryptogains", "Crypto Gains"),
    ("bonus", "Bonus"),
    ("cashgifts", "Cash Gifts"),
    ("refunds", "Refunds"),
    ("pocketmoney", "Pocket Money"),
    ("governmentaid", "Government Aid"),
    ("otherincome", "Other Income"),
];

pub const FRENCH: &[(&str, &str)] = &[
    ("groceries", "Épicerie"),
    ("diningout", "Restaurants"),
    ("rent", "Loyer"),
    ("fuel", "Carburant"),
    ("transport", "Transport"),
    ("shopping", "Shopping"),
    ("utilities", "Services publics"),
    ("mobilerecharge", "Recharge mobile"),
    ("internet", "Internet"),
    ("electricity", "Électricité"),
    ("water", "Eau"),
    ("gas", "Gaz"),
    ("billsemi", "Factures et EMI"),
    ("loanpayment", "Remboursement de prêt"),
    ("insurance", "Assurance"),
    ("subscriptions", "Abonnements"),
    ("onlineorders", "Commandes en ligne"),
    ("healthcare", "Santé"),
    ("doctor", "Médecin"),
    ("hospital", "Hôpital"),
    ("medicine", "Médicaments"),
    ("education", "Éducation"),
    ("schoolfees", "Frais de scolarité"),
    ("kids", "Enfants"),
    ("babyessentials", "Bébé"),
    ("daycare", "Garderie"),
    ("entertainment", "Divertissement"),
    ("movies", "Cinéma"),
    ("travel", "Voyage"),
    ("taxicab", "Taxi"),
    ("parking", "Parking"),
    ("tolls", "Péages"),
    ("vehicleservice", "Entretien véhicule"),
    ("vehicleinsurance", "Assurance véhicule"),
    ("carwash", "Lavage auto"),
    ("homerepairs", "Réparations maison"),
    ("furniture", "Meubles"),
    ("appliances", "Appareils"),
    ("householditems", "Articles ménagers"),
    ("homeservicesmaid", "Services à domicile"),
    ("maidsalary", "Salaire ménagère"),
    ("familysupport", "Soutien familial"),
    ("gifts", "Cadeaux"),
    ("charitydonations", "Dons"),
    ("partiesevents", "Fêtes et événements"),
    ("beautysalon", "Salon de beauté"),
    ("personalcare", "Soins personnels"),
    ("laundry", "Blanchisserie"),
    ("stationery", "Papeterie"),
    ("courierpostage", "Courrier"),
    ("pets", "Animaux de compagnie"),
    ("vet", "Vétérinaire"),
    ("bankfees", "Frais bancaires"),
    ("latefeespenalties", "Pénalités"),
    ("others", "Autres"),
    ("savings", "Épargne"),
    ("mutualfundssip", "Fonds communs"),
    ("cryptoinvestment", "Investissement Crypto"),
    ("emergencyfund", "Fonds d'urgence"),
    ("stocks", "Actions"),
    ("bonds", "Obligations"),
    ("realestate", "Immobilier"),
    ("cryptocurrency", "Cryptomonnaie"),
    ("etfs", "ETF"),
    ("commodities", "Matières premières"),
    ("fixeddeposit", "Dépôt à terme"),
    ("gold", "Or"),
    ("reits", "REITs"),
    ("npsretirementfund", "Retraite"),
    ("insuranceinvestmentplans", "Plans d'assurance"),
    ("p2plending", "Prêt P2P"),
    ("roboadvisors", "Robo-conseillers"),
    ("startupangelinvestment", "Investissement Startup"),
    ("options", "Options"),
    ("futures", "Futures"),
    ("salary", "Salaire"),
    ("businessincome", "Revenus commerciaux"),
    ("freelance", "Freelance"),
    ("parttimejob", "Travail à temps partiel"),
    ("rentalincome", "Revenus locatifs"),
    ("interestincome", "Intérêts"),
    ("investmentreturns", "Retours sur investissement"),
    ("cryptogains", "Gains Crypto"),
    ("bonus", "Bonus"),
    ("cashgifts", "Cadeaux en espèces"),
    ("refunds", "Remboursements"),
    ("pocketmoney", "Argent de poche"),
    ("governmentaid", "Aide gouvernementale"),
    ("otherincome", "Autres revenus"),
];

pub const GERMAN: &[(&str, &str)] = &[
    ("groceries", "Lebensmittel"),
    ("diningout", "Essen gehen"),
    ("rent", "Miete"),
    ("fuel", "Kraftstoff"),
    ("transport", "Transport"),
    ("shopping", "Einkaufen"),
    ("utilities", "Nebenkosten"),
    ("mobilerecharge", "Handy aufladen"),
    ("internet", "Internet"),
    ("electricity", "Strom"),
    ("water", "Wasser"),
    ("gas", "Gas"),
    ("billsemi", "Rechnungen & EMI"),
    ("loanpayment", "Kreditrate"),
    ("insurance", "Versicherung"),
    ("subscriptions", "Abonnements"),
    ("onlineorders", "Online-Bestellungen"),
    ("healthcare", "Gesundheit"),
    ("doctor", "Arzt"),
    ("hospital", "Krankenhaus"),
    ("medicine", "Medikamente"),
    ("education", "Bildung"),
    ("schoolfees", "Schulgebühren"),
    ("kids", "Kinder"),
    ("babyessentials", "Babybedarf"),
    ("daycare", "Kita"),
    ("entertainment", "Unterhaltung"),
    ("movies", "Kino"),
    ("travel", "Reisen"),
    ("taxicab", "Taxi"),
    ("parking", "Parken"),
    ("tolls", "Maut"),
    ("vehicleservice", "Fahrzeugservice"),
    ("vehicleinsurance", "Kfz-Versicherung"),
    ("carwash", "Autowäsche"),
    ("homerepairs", "Hausreparaturen"),
    ("furniture", "Möbel"),
    ("appliances", "Geräte"),
    ("householditems", "Haushaltswaren"),
    ("homeservicesmaid", "Hauswirtschaft"),
    ("maidsalary", "Gehalt Haushaltshilfe"),
    ("familysupport", "Familienunterstützung"),
    ("gifts", "Geschenke"),
    ("charitydonations", "Spenden"),
    ("partiesevents", "Feiern & Events"),
    ("beautysalon", "Schönheitssalon"),
    ("personalcare", "Körperpflege"),
    ("laundry", "Wäscherei"),
    ("stationery", "Schreibwaren"),
    ("courierpostage", "Post & Kurier"),
    ("pets", "Haustiere"),
    ("vet", "Tierarzt"),
    ("bankfees", "Bankgebühren"),
    ("latefeespenalties", "Verzugsgebühren"),
    ("others", "Sonstiges"),
    ("savings", "Ersparnisse"),
    ("mutualfundssip", "Investmentfonds"),
    ("cryptoinvestment", "Krypto-Investition"),
    ("emergencyfund", "Notfallfonds"),
    ("stocks", "Aktien"),
    ("bonds", "Anleihen"),
    ("realestate", "Immobilien"),
    ("cryptocurrency", "Kryptowährung"),
    ("etfs", "ETFs"),
    ("commodities", "Rohstoffe"),
    ("fixeddeposit", "Festgeld"),
    ("gold", "Gold"),
    ("reits", "REITs"),
    ("npsretirementfund", "Altersvorsorge"),
    ("insuranceinvestmentplans", "Versicherungspläne"),
    ("p2plending", "P2P-Kredite"),
    ("roboadvisors", "Robo-Advisors"),
    ("startupangelinvestment", "Startup-Investition"),
    ("options", "Optionen"),
    ("futures", "Futures"),
    ("salary", "Gehalt"),
    ("businessincome", "Geschäftseinkommen"),
    ("freelance", "Freiberuflich"),
    ("parttimejob", "Teilzeitjob"),
    ("rentalincome", "Mieteinnahmen"),
    ("interestincome", "Zinserträge"),
    ("investmentreturns", "Kapitalerträge"),
    ("cryptogains", "Krypto-Gewinne"),
    ("bonus", "Bonus"),
    ("cashgifts", "Geldgeschenke"),
    ("refunds", "Rückerstattungen"),
    ("pocketmoney", "Taschengeld"),
    ("governmentaid", "Staatliche Hilfe"),
    ("otherincome", "Sonstiges Einkommen"),
];

/// Returns the curated table for a language, or the English reference labels
/// verbatim when no curated translation exists yet. The untranslated
/// placeholder keeps every category key present until a real translation
/// lands, and is intentional rather than an omission.
pub fn categories_for(lang: &str) -> &'static [(&'static str, &'static str)] {
    match lang {
        "fr" => FRENCH,
        "de" => GERMAN,
        _ => REFERENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    fn keys<'a>(table: &[(&'a str, &'a str)]) -> HashSet<&'a str> {
        table.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn curated_tables_cover_every_reference_key() {
        assert_eq!(FRENCH.len(), REFERENCE.len());
        assert_eq!(GERMAN.len(), REFERENCE.len());

        assert_eq!(keys(FRENCH), keys(REFERENCE));
        assert_eq!(keys(GERMAN), keys(REFERENCE));
    }

    #[test]
    fn uncurated_languages_fall_back_to_reference_labels() {
        for lang in ["pt-BR", "zh-CN", "ja", "hi", "ru", "ar"] {
            assert_eq!(categories_for(lang), REFERENCE);
        }

        assert_eq!(categories_for("fr"), FRENCH);
        assert_eq!(categories_for("de"), GERMAN);
    }
}
