//! The authored story trees for all four categories.
//!
//! Hand-written narrative data: each category runs five decision points
//! deep, with branch topology depending on earlier picks. Successor nodes
//! shared between branches are built once and reference-counted.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::types::{Category, StoryCatalog, StoryNode, StoryOption};
use crate::progress::Effects;

/// Week number of this story batch.
pub const STORY_WEEK: u32 = 1;

/// The authored catalog, built once.
pub static AUTHORED_CATALOG: Lazy<StoryCatalog> = Lazy::new(StoryCatalog::authored);

impl StoryCatalog {
    /// The full hand-authored data set.
    pub fn authored() -> Self {
        let mut roots = HashMap::new();
        roots.insert(Category::Finance, finance_root());
        roots.insert(Category::TechnicalTeam, technical_team_root());
        roots.insert(Category::Sponsors, sponsors_root());
        roots.insert(Category::Fans, fans_root());
        StoryCatalog::with_roots(roots, STORY_WEEK)
    }
}

fn node(text: &str, options: Vec<StoryOption>) -> Arc<StoryNode> {
    Arc::new(StoryNode { text: text.to_string(), options })
}

fn opt(text: &str, effects: Effects, next: &Arc<StoryNode>) -> StoryOption {
    StoryOption { text: text.to_string(), effects, next: Arc::clone(next) }
}

fn end() -> Arc<StoryNode> {
    node("End", vec![])
}

fn fx() -> Effects {
    Effects::new()
}

fn finance_root() -> Arc<StoryNode> {
    let story5a = node(
        "Denizlispor'un kredi ödemeleri yaklaşıyor ve nakit akışı hala sıkıntılı. Transfer dönemi de kapıda. Son hamleniz ne olacak?",
        vec![
            opt("Belediye ve valilikle görüşüp destek iste", fx().finance(15).sponsors(5), &end()),
            opt("Ana sponsorla erken ödeme anlaşması yap", fx().finance(10).sponsors(-10), &end()),
            opt("Antrenman tesislerinin bir bölümünü kirala", fx().finance(20).technical_team(-15), &end()),
            opt("Taraftar bağış kampanyası başlat", fx().finance(10).fans(15).sponsors(5), &end()),
        ],
    );

    let story5b = node(
        "Genç yıldızınız Ahmet Çalık'a Avrupa'dan transfer teklifleri geliyor ama takım performansı kritik bir noktada. Takım ligde kalma mücadelesi veriyor. Nasıl ilerleyeceksiniz?",
        vec![
            opt("Sezon sonu anlaşmayla şimdi sat", fx().finance(30).technical_team(-5).fans(5), &end()),
            opt("Fiyatı yükselt ve pazarlık yap", fx().finance(20).technical_team(-10).fans(-5), &end()),
            opt("Teklifi reddet, oyuncuya prim sözü ver", fx().finance(-15).technical_team(20).fans(15), &end()),
            opt("Oyuncuyu ikna edip yeni sözleşme imzalat", fx().finance(-10).technical_team(15).fans(20), &end()),
        ],
    );

    let story4a = node(
        "Yapıkredi'den aldığınız kredi onaylandı. Kulübe 25 milyon TL geldi. Öncelikli kullanım alanı ne olacak?",
        vec![
            opt("Vergi ve SSK borç yapılandırması", fx().finance(20).sponsors(10), &story5a),
            opt("Denizli Atatürk Stadyumu iyileştirmesi", fx().finance(-15).technical_team(10).fans(25), &story5a),
            opt("Şimdi 2 oyuncu transferi yap", fx().finance(-10).technical_team(25).fans(15), &story5b),
            opt("Halı saha kompleksi inşaatını başlat", fx().finance(-5).technical_team(5).fans(10).sponsors(15), &story5b),
        ],
    );

    let story4b = node(
        "Mehmet Akyüz'ü sattıktan sonra sosyal medyada #YönetimİSTİFA etiketi trend oldu. Taraftar tepkisi büyüyor. Nasıl yöneteceksiniz?",
        vec![
            opt("2 yeni oyuncu transferi sözü ver", fx().fans(20).finance(-15).technical_team(10), &story5a),
            opt("Basın toplantısı düzenleyip finansal durumu açıkla", fx().fans(15).sponsors(10).finance(5), &story5b),
            opt("Altyapıdan genç yetenekleri A takıma al", fx().fans(10).technical_team(15).finance(10), &story5a),
            opt("Sosyal medya yorumlarını gizle, sessiz kal", fx().fans(-25).sponsors(-10).finance(-5), &story5b),
        ],
    );

    let story3a = node(
        "Kredi görüşmeleri devam ederken Eti, Pamukkale Turizm ve Denizli Basket gibi sponsorlar endişeli. Ne yapmalısınız?",
        vec![
            opt("5 yıllık finansal yapılandırma planı sun", fx().sponsors(20).finance(15), &story4a),
            opt("Forma reklamlarında indirim teklif et", fx().sponsors(15).finance(-5), &story4a),
            opt("Başkanlar Zirvesi toplantısı düzenle", fx().sponsors(10).finance(5).fans(10), &story4b),
            opt("Sponsorlara özel VIP locası tahsis et", fx().sponsors(15).finance(-10).fans(-5), &story4b),
        ],
    );

    let story3b = node(
        "Mehmet Akyüz'ün satışından gelen 18 milyon TL için yatırım planı gerekiyor. Nasıl değerlendireceksiniz?",
        vec![
            opt("Kıvaş tesislerindeki ipotekleri kapat", fx().finance(25).sponsors(15), &story4a),
            opt("İncilipınar'da yeni altyapı tesisi aç", fx().technical_team(25).finance(-15).fans(15), &story4b),
            opt("Merkez orta saha transferi yap", fx().technical_team(20).fans(15).finance(-20), &story4a),
            opt("Paranın yarısını rezerv tut", fx().finance(20).sponsors(5).fans(-15), &story4b),
        ],
    );

    let story2a = node(
        "Yapıkredi ve Denizbank kredi şartlarını sundu. Nasıl ilerlersiniz?",
        vec![
            opt("Düşük faizli 3 yıl vadeli teklifini kabul et", fx().finance(20).sponsors(5), &story3a),
            opt("Ödeme takviminde 1 yıl öteleme iste", fx().finance(15).sponsors(-5), &story3a),
            opt("Belediye garantörlüğünde yeniden başvur", fx().finance(10).sponsors(15), &story3b),
            opt("Kredi yerine taraftar bono ihracı planla", fx().finance(5).sponsors(5).fans(20), &story3b),
        ],
    );

    let story2b = node(
        "Mehmet Akyüz'e Trabzonspor'dan 18 milyon TL teklif var. Nasıl değerlendirirsiniz?",
        vec![
            opt("Sezon ortasında hemen sat", fx().finance(30).technical_team(-20).fans(-15), &story3b),
            opt("22 milyon TL'ye pazarlık yap", fx().finance(20).technical_team(-10).fans(-5), &story3a),
            opt("Oyuncunun görüşünü al", fx().technical_team(15).fans(10).finance(-5), &story3b),
            opt("Sezon sonu 20 milyon TL garantili anlaş", fx().technical_team(10).finance(15).fans(5), &story3a),
        ],
    );

    node(
        "Denizlispor ciddi bir finansal krizle karşı karşıya. Kulübün 35 milyon TL borcu var ve yaklaşan ödemeler için nakit akışı yetersiz. İlk hamleniz ne olacak?",
        vec![
            opt("Yapıkredi'den kredi başvurusu yap", fx().finance(10).sponsors(5).fans(5), &story2a),
            opt("Takım kaptanı Mehmet Akyüz'ü sat", fx().finance(30).technical_team(-20).fans(-15), &story2b),
            opt("Futbolcu maaşlarında %20 kesintiye git", fx().finance(20).technical_team(-15).fans(-5), &story2a),
            opt("Denizli iş insanlarını sponsorluk için topla", fx().sponsors(20).finance(15).fans(10), &story2b),
        ],
    )
}

fn technical_team_root() -> Arc<StoryNode> {
    let story5_experience = node(
        "Sezon sonuna yaklaşırken, deneyimli teknik ekibiniz başarılı sonuçlar aldı. Özellikle yardımcı antrenörünüz Ali Tandoğan, Süper Lig'den baş antrenörlük teklifi aldığını açıkladı. Takım şu anda play-off potasında ancak teknik ekibin geleceği belirsiz.",
        vec![
            opt("Tüm teknik ekibe 2 yıllık yeni sözleşme ve maaş artışı teklif et", fx().finance(-25).technical_team(30).fans(15), &end()),
            opt("Ali Tandoğan'ı sportif direktörlüğe yükselt, teknik direktöre yetki ver", fx().technical_team(20).finance(-15).fans(10), &end()),
            opt("Mevcut düzeni bozmadan sürdürmeye çalış", fx().technical_team(-10).finance(5).fans(-5), &end()),
            opt("Eski Denizlisporlu efsane Mustafa Özkan'ı yardımcı antrenör olarak getir", fx().technical_team(15).finance(-20).fans(25), &end()),
        ],
    );

    let story5_youth = node(
        "Altyapıdan terfi ettirdiğiniz genç teknik ekip, modern futbol anlayışıyla takımda dönüşüm başlattı. Özellikle 35 yaş üstü tecrübeli oyuncular Serkan Aykut ve Zeki Önatlı yeni sisteme adapte olmakta zorlanıyor. Denizli basını ise genç teknik ekibin cesur yaklaşımını övüyor.",
        vec![
            opt("Genç teknik ekibin yetkilerini artır, tecrübeli oyuncuları yedek kulübesine çek", fx().technical_team(25).fans(5).finance(-5), &end()),
            opt("Bursaspor'un eski hocası Şenol Çorlu'yu mentor olarak getir", fx().technical_team(20).finance(-20).fans(10), &end()),
            opt("Tecrübeli oyuncuları kadro dışı bırak, gençlere şans ver", fx().technical_team(15).finance(10).fans(-15), &end()),
            opt("Daha uzlaşmacı bir yaklaşımla eski-yeni dengesini kur", fx().technical_team(10).fans(15).finance(-5), &end()),
        ],
    );

    let story4a = node(
        "Teknik direktör Ali Yalçın 3-5-2 sistemine geçmek istiyor ama oyuncular 4-2-3-1 düzenine alışmış durumda. Uyum sorunu yaşanıyor. Ne yapmalı?",
        vec![
            opt("Sabah-akşam çift antrenman programı uygula", fx().technical_team(20).finance(-15).fans(5), &story5_experience),
            opt("Kanat oyuncusu ve stoper takviyesi yap", fx().finance(-25).technical_team(25).fans(15), &story5_experience),
            opt("4-2-3-1 düzenine geri dön", fx().technical_team(-10).finance(5).fans(-5), &story5_youth),
            opt("Taktik geçişi kademeli yap, hazırlık maçları planla", fx().technical_team(15).finance(-10).fans(10), &story5_youth),
        ],
    );

    let story4b = node(
        "Altyapıdan 17 yaşındaki Mahmut Küçük, PAF takımında 12 maçta 14 gol attı ve A takım antrenmanlarında parlıyor. Nasıl değerlendirirsiniz?",
        vec![
            opt("Direkt A takıma alıp Süper Lig maçında ilk 11'de oynat", fx().technical_team(20).fans(25).finance(-5), &story5_experience),
            opt("Samsunspor'a 1 yıllığına kiralık gönder", fx().finance(15).technical_team(10).fans(-10), &story5_youth),
            opt("A takımla antrenman yaptırıp gençlik kupasında oynamaya devam ettir", fx().technical_team(15).fans(5).finance(5), &story5_experience),
            opt("Gelişimini hızlandırmak için özel antrenör tut", fx().technical_team(25).finance(-20).fans(10), &story5_youth),
        ],
    );

    let story3a = node(
        "Takım kaptanı Recep Niyaz, haftada 6 gün antrenman temposunun çok yoğun olduğunu ve sakatlık riskinin arttığını belirtiyor. Nasıl yaklaşacaksınız?",
        vec![
            opt("Haftada 5 güne düşür, yoga ve pilates ekle", fx().technical_team(15).finance(-10).fans(5), &story4a),
            opt("Teknik direktör ve kaptan arasında arabuluculuk yap", fx().technical_team(20).finance(-5).fans(10), &story4b),
            opt("GPS takip sistemi ile antrenman yoğunluğunu analiz et", fx().technical_team(15).finance(-20).fans(5), &story4a),
            opt("Kaptanı teknik direktörle baş başa görüştür", fx().technical_team(-5).fans(-10), &story4b),
        ],
    );

    let story3b = node(
        "Scout ekibi, 21 yaşında Arnavut stoper Arjan Beqiri'yi keşfetti. İstatistikleri çok iyi ve bonservisi 500 bin euro. Nasıl ilgileneceksiniz?",
        vec![
            opt("Hemen 3+1 yıllık sözleşme ve 600 bin euro teklif et", fx().finance(-25).technical_team(25).fans(10), &story4a),
            opt("2 haftalık deneme süresine davet et", fx().technical_team(15).finance(-5).fans(5), &story4b),
            opt("Önce maçlarını canlı izle, sonra görüşme yap", fx().technical_team(10).finance(-10), &story4a),
            opt("Rakip takımların ilgisini ölç, sonra karar ver", fx().technical_team(5), &story4b),
        ],
    );

    let story2a = node(
        "Deneyimli antrenör Faruk Hadžić takıma katıldı. Şimdi öncelik ne olmalı?",
        vec![
            opt("19-21 yaş arası yetenekleri A takıma dahil et", fx().technical_team(20).finance(-10).fans(15), &story3a),
            opt("3-5-2 sistemine geçiş hazırlıkları başlat", fx().technical_team(15).finance(-15).fans(10), &story3b),
            opt("HIIT ve fonksiyonel antrenmanlarla kondisyon artır", fx().technical_team(10).finance(-10).fans(5), &story3a),
            opt("Mevcut 4-2-3-1 düzeninde ince ayarlar yap", fx().technical_team(5).finance(-5), &story3b),
        ],
    );

    let story2b = node(
        "Altyapı direktörü Serdar Kesimal istifa etti. Altyapı takımları kaos yaşıyor. Ne yapacaksınız?",
        vec![
            opt("Fenerbahçe altyapısından Eser Özaltındere'yi getir", fx().finance(-25).technical_team(25).fans(10), &story3a),
            opt("PAF takım antrenörü Ahmet Duman'ı terfi ettir", fx().technical_team(15).finance(-5).fans(15), &story3b),
            opt("Eski Denizlisporlu Mustafa Özkan'ı ikna et", fx().technical_team(20).finance(-15).fans(25), &story3a),
            opt("Scout ekibi başkanına geçici yetki ver", fx().technical_team(-5).fans(-5), &story3b),
        ],
    );

    node(
        "Teknik direktör Ali Yalçın, yeni bir yardımcı antrenör istiyor. Özellikle set parçaları ve standart durumlarda uzmanlaşmış bir isim arıyor. Ne yapacaksınız?",
        vec![
            opt("Lech Poznan'dan Bosnalı antrenör Faruk Hadžić'i transfer et", fx().finance(-20).technical_team(25).fans(5), &story2a),
            opt("Altyapı hocalarından Ahmet Duman'ı terfi ettir", fx().technical_team(15).finance(-5).fans(10), &story2b),
            opt("İngiliz set oyunu uzmanı Mike Phelan'ı getir", fx().finance(-25).technical_team(30), &story2a),
            opt("Bütçe yok, teknik direktöre talebi için şu an uygun olmadığını söyle", fx().finance(10).technical_team(-15).fans(-5), &story2b),
        ],
    )
}

fn sponsors_root() -> Arc<StoryNode> {
    let story5a = node(
        "Denizli Cam'ın logosunu içeren yeni forma tasarımı sosyal medyada tartışmalara yol açtı. Taraftarlar geleneksel forma tasarımının bozulduğunu söylüyor. Nasıl yöneteceksiniz?",
        vec![
            opt("Horoz Cafe'de taraftarlarla buluşup görüşlerini dinle", fx().fans(25).sponsors(5).finance(-5), &end()),
            opt("Alternatif deplasman forması için oylama düzenle", fx().fans(20).finance(-10), &end()),
            opt("Denizli Cam ve taraftar temsilcileriyle ortak basın toplantısı düzenle", fx().fans(15).sponsors(15).finance(-5), &end()),
            opt("Tasarım sanat direktörüyle röportaj yapıp konsepti anlat", fx().fans(10).sponsors(10), &end()),
        ],
    );

    let story5b = node(
        "Ek ücret talebiniz sonrası Pamukkale Turizm alternatif kulüplerle görüşmeye başladı. Firma sahibi Denizlispor'a bağlılığını vurgulamasına rağmen pazarlık süreci gergin ilerliyor.",
        vec![
            opt("Özel VIP deneyimi ve maç günü etkinlikleri ile talebi destekle", fx().finance(15).sponsors(20).fans(5), &end()),
            opt("Sponsorluk paketini yeniden yapılandır, ödeme takvimini esnet", fx().finance(10).sponsors(15), &end()),
            opt("Stadyumda Pamukkale Corner bölümü oluştur", fx().finance(5).sponsors(25).fans(10), &end()),
            opt("Talebinden kısmen vazgeç, uzun vadeli anlaşma imzala", fx().finance(-10).sponsors(15).fans(5), &end()),
        ],
    );

    let story5c = node(
        "Orta yol bulma çabanız Eti firması tarafından takdir edildi. Şimdi logolarının göğüs sponsorluğu dışında kulübün dijital platformlarında da yer almasını istiyorlar.",
        vec![
            opt("Tüm sosyal medya ve dijital varlıklarda Eti'ye tam erişim ver", fx().sponsors(25).finance(20).fans(-10), &end()),
            opt("Web sitesi ve mobil uygulamada özel bölüm tahsis et", fx().sponsors(20).finance(15), &end()),
            opt("Taraftarlar için Eti ürünlerinde indirim kampanyası başlat", fx().sponsors(15).fans(20).finance(10), &end()),
            opt("Denizlispor Futbol Akademisi'ne 'Eti' ismini ver", fx().sponsors(20).technical_team(15).fans(5), &end()),
        ],
    );

    let story5d = node(
        "Talebi reddetmeniz sonrası Coca-Cola kontratı feshetmekle tehdit ediyor. Denizli basını durumu yakından takip ediyor ve kriz büyüyor.",
        vec![
            opt("Pepsi ile acil görüşme ayarla", fx().sponsors(10).finance(-5).fans(-5), &end()),
            opt("Vali ve belediye başkanını arabulucu olarak devreye sok", fx().sponsors(15).fans(10), &end()),
            opt("Taraftar gruplarıyla boykot kampanyası başlat", fx().sponsors(-20).finance(-15).fans(25), &end()),
            opt("Daha küçük yerel içecek firmalarıyla görüş", fx().sponsors(5).finance(-10).fans(15), &end()),
        ],
    );

    let story4 = node(
        "Forma sponsoru Denizli Cam tasarımda değişiklik talep ediyor. Horozun daha küçük, kendi logolarının daha büyük olmasını istiyorlar. Nasıl karşılık vereceksiniz?",
        vec![
            opt("Taraftarın tepkisini göze alıp tasarımı değiştir", fx().sponsors(25).fans(-20).finance(15), &story5a),
            opt("Tasarım değişikliği için ek 2 milyon TL talep et", fx().sponsors(-10).finance(25).fans(-5), &story5b),
            opt("Forma arkasında daha büyük logo ve omuzlarda branding öner", fx().sponsors(20).fans(10).finance(10), &story5c),
            opt("Kulübün 'Horoz' kimliğinin değiştirilemeyeceğini belirt", fx().sponsors(-15).finance(-10).fans(25), &story5d),
        ],
    );

    let story3 = node(
        "Coca-Cola Denizli Atatürk Stadyumu isim hakkı için 5 yıllığına yıllık 5 milyon TL teklif sundu. Taraftar grupları şimdiden tepki göstermeye başladı. Ne yapacaksınız?",
        vec![
            opt("Denizli Atatürk Coca-Cola Arena olarak kabul et", fx().sponsors(30).finance(25).fans(-25), &story4),
            opt("Stadın ismini koruma şartıyla 'Coca-Cola sunar' formülü öner", fx().sponsors(20).finance(15).fans(5), &story4),
            opt("Sosyal medyada anket düzenleyip taraftar görüşü al", fx().sponsors(-5).fans(25).finance(-5), &story4),
            opt("Atatürk isminin korunması gerektiğini belirtip teklifi reddet", fx().sponsors(-15).fans(30).finance(-20), &story4),
        ],
    );

    let story2a_new_package = node(
        "Yeni sponsorluk paketiniz yerel ve ulusal firmalardan ilgi görmeye başladı. Denizli Cam, Pamukkale Turizm ve LC Waikiki ilk tekliflerini sundu. Nasıl ilerlemelisiniz?",
        vec![
            opt("LC Waikiki'nin yüksek teklifini değerlendir", fx().sponsors(25).finance(20).fans(-5), &story3),
            opt("Uzun yıllardır destek veren Pamukkale Turizm'e öncelik tanı", fx().sponsors(15).finance(15).fans(15), &story3),
            opt("Denizli Cam ile şehir markası ortaklığına odaklan", fx().sponsors(20).fans(20).finance(10), &story3),
            opt("Aynı anda üç firmayla da farklı alanlarda anlaş", fx().sponsors(30).finance(15).fans(5), &story3),
        ],
    );

    let story2 = node(
        "Mevcut sponsorlar pandemi nedeniyle ödeme planında revizyon istiyor. Pamukkale Turizm ve Denizli Tekstil ödemeleri ertelemek istiyor. Nasıl yaklaşacaksınız?",
        vec![
            opt("6 aylık ödeme erteleme ile esneklik göster", fx().sponsors(20).finance(-15).fans(5), &story3),
            opt("Sözleşme şartlarını hatırlat, alternatif firmalarla görüştüğünü belirt", fx().sponsors(-20).finance(15).fans(-5), &story3),
            opt("Ödeme indirimi karşılığında sözleşme süresini uzat", fx().sponsors(15).finance(-5).fans(10), &story3),
            opt("Vade farkıyla kademeli ödeme planı sun", fx().sponsors(10).finance(10), &story3),
        ],
    );

    node(
        "Sezon başında sponsorluk gelirleri pandemi etkisiyle düşük seyrediyor. Denizlispor'un forma ve stadyum sponsorları yenilenme bekliyor. İlk adımınız ne olacak?",
        vec![
            opt("Dijital varlıklara odaklanan yeni sponsorluk paketi hazırla", fx().sponsors(20).finance(5).fans(10), &story2a_new_package),
            opt("Mevcut sponsorlarla pandemi dayanışma toplantısı düzenle", fx().sponsors(15).finance(10).fans(5), &story2),
            opt("Ulusal ve uluslararası büyük markalarla görüşmeler başlat", fx().sponsors(25).finance(-5).fans(-5), &story2),
            opt("Denizli yerel iş insanları ve KOBİ'lere yönel", fx().sponsors(15).fans(20).finance(5), &story2),
        ],
    )
}

fn fans_root() -> Arc<StoryNode> {
    let story4a = node(
        "Yaptığınız %30 indirim kampanyası sonrası bilet satışları %40 arttı ama gelir %10 düştü. Denizli Atatürk Stadı'nda ortalama seyirci 12.000'e yükseldi. Dengeyi nasıl sağlayacaksınız?",
        vec![
            opt(
                "Tam biletlerde %20 daha indirim yapıp doluluk oranını maksimize et",
                fx().fans(25).finance(-20).sponsors(15),
                &node("Stadyum doluluk oranı %85'e yükseldi. Taraftar desteği arttı, sponsorlar kalabalık tribünlerden memnun ancak bilet gelirleri düştü.", vec![]),
            ),
            opt(
                "Mevcut fiyatları koru, kombine kampanyasına odaklan",
                fx().fans(15).finance(10).sponsors(10),
                &node("Kombine kampanyası ilgi gördü, finansal denge korundu. Taraftarlar da makul fiyatlandırmadan memnun.", vec![]),
            ),
            opt(
                "Premium tribün ve VIP localar oluştur",
                fx().fans(5).finance(25).sponsors(20),
                &node("VIP alanlar Denizli iş dünyasının ilgisini çekti. Gelir arttı ancak bazı taraftarlar kulübün ticarileştiğini düşünüyor.", vec![]),
            ),
            opt(
                "Taraftar ürünleri ve maç içi harcamalara yönel",
                fx().fans(15).finance(15).sponsors(5),
                &node("Forma satışları ve stadyum içi harcamalar arttı. Taraftarlar kulübe hem tribünde hem ekonomik olarak destek veriyor.", vec![]),
            ),
        ],
    );

    let story4b = node(
        "Dernek başkanlarıyla görüşmeniz olumlu geçti. 'Horozlar Tek Yürek' kombine kampanyası büyük ilgi gördü. 8,000 kombine satıldı. Nasıl değerlendireceksiniz?",
        vec![
            opt(
                "Kombine sahiplerine özel futbolcularla buluşma etkinliği düzenle",
                fx().fans(25).technical_team(10).finance(-5),
                &node("Taraftar-futbolcu buluşması büyük ilgi gördü. Takım motivasyonu yükseldi ve taraftar aidiyet duygusu güçlendi.", vec![]),
            ),
            opt(
                "Kombine sahiplerine özel indirimli forma kampanyası başlat",
                fx().fans(20).finance(15).sponsors(5),
                &node("Forma satışları patladı, taraftarlar maçlara yeni formalarıyla geliyor. Stadyum görsel şölene dönüştü.", vec![]),
            ),
            opt(
                "Deplasman maçları için kombine sahiplerine özel otobüs seferleri düzenle",
                fx().fans(30).finance(-15).technical_team(15),
                &node("Deplasman desteği arttı, takım her yerde kalabalık taraftar desteği buluyor. Moral yüksek ancak organizasyon masrafları da arttı.", vec![]),
            ),
            opt(
                "Kombine hedefini 10,000'e çıkarıp taraftar gruplarına satış primi ver",
                fx().fans(15).finance(20).sponsors(10),
                &node("Taraftar grupları aktif satış çabalarıyla kombine hedefi aşıldı. Kulüp gelirleri yükseldi ve tribünler her maç dolu.", vec![]),
            ),
        ],
    );

    let story4c = node(
        "Yazılı açıklamanız sonrası taraftarlar sosyal medyada #YönetimiDinliyoruz etiketiyle tepki gösterdi. Açıklamanızda şeffaf finansal durum analizi paylaşmanız takdir topladı. Bir sonraki adım ne olacak?",
        vec![
            opt(
                "Eski Denizlisporlu efsanelerle 'Horoz Nostalji Gecesi' düzenle",
                fx().fans(30).finance(-10).sponsors(10),
                &node("2003-2004 sezonu UEFA Kupası kadrosunun buluştuğu nostalji gecesi muhteşem geçti. Taraftarlar duygusal anlar yaşadı.", vec![]),
            ),
            opt(
                "Maç öncesi taraftar festivallerine başla",
                fx().fans(20).sponsors(25).finance(-5),
                &node("Stadyum çevresinde düzenlenen festivaller hem taraftar deneyimini geliştirdi hem de sponsorlara yeni alanlar açtı.", vec![]),
            ),
            opt(
                "Denizlispor Taraftar Konseyi kur ve karar süreçlerine dahil et",
                fx().fans(25).technical_team(-5),
                &node("Taraftar Konseyi fikri büyük ilgi gördü. Taraftarlar kulüple daha bütünleşik hissediyor ancak teknik ekip kararlara müdahale endişesi yaşıyor.", vec![]),
            ),
            opt(
                "Taraftar gruplarıyla üç ayda bir düzenli toplantı planı oluştur",
                fx().fans(15).technical_team(5).sponsors(5),
                &node("Düzenli iletişim kanalları sayesinde taraftar-yönetim ilişkileri güçlendi. Sorunlar büyümeden çözülmeye başladı.", vec![]),
            ),
        ],
    );

    let story4d = node(
        "Görüşmeyi ertelemeniz nedeniyle taraftar grupları 60. dakikada stadı terk etme eylemi başlattı. İlk maçta yaklaşık 2,000 kişi eyleme katıldı ve basının ilgisini çekti. Nasıl yöneteceksiniz?",
        vec![
            opt(
                "Acil kamuoyu açıklaması yapıp taraftarlardan özür dile",
                fx().fans(20).technical_team(5),
                &node("Özür açıklamanız taraftar grupları tarafından olumlu karşılandı. Eylem sonlandırıldı ve ilişkiler onarılmaya başladı.", vec![]),
            ),
            opt(
                "Taraftar liderlerini acil toplantıya çağır",
                fx().fans(25).finance(-5),
                &node("Acil toplantıda taraftar temsilcileri sorunlarını doğrudan iletebildi. Somut adımlar planlandı ve eylem son buldu.", vec![]),
            ),
            opt(
                "Futbolcuların taraftarla buluşmasını organize et",
                fx().fans(15).technical_team(15).finance(-10),
                &node("Oyuncuların taraftarla buluşması tansiyonu düşürdü ancak bazı taraftar grupları yönetimin sorumluluktan kaçtığını düşünüyor.", vec![]),
            ),
            opt(
                "Eylemcilere stadyum yasağı getir",
                fx().fans(-25).finance(-15).sponsors(-10),
                &node("Yasak kararı büyük tepki topladı. Taraftar grupları birleşti ve protestolar büyüdü. Kriz derinleşiyor.", vec![]),
            ),
        ],
    );

    let story3 = node(
        "Denizlispor Taraftarlar Derneği, Çarşı Grubu ve Horoz Gençlik yönetimle resmi görüşme talep ediyor. Bilet fiyatları, stadyumdaki yemek hizmetleri ve maç saatleri ana gündem maddeleri. Nasıl yaklaşacaksınız?",
        vec![
            opt("Pamukkale Üniversitesi'nde halka açık forum düzenle", fx().fans(25).technical_team(5).finance(-10), &story4a),
            opt("Dernek başkanlarıyla kulüp tesislerinde özel toplantı yap", fx().fans(15).technical_team(10).finance(-5), &story4b),
            opt("Kulüp web sitesinden detaylı yazılı açıklama yap", fx().fans(5).sponsors(10), &story4c),
            opt("Sezon sonu geniş katılımlı toplantı vaadiyle görüşmeyi ertele", fx().fans(-15).technical_team(5).finance(5), &story4d),
        ],
    );

    let story2 = node(
        "Ligde son 5 maçta alınan 1 puan ve 11 gol yeme sonrası taraftar tepkisi büyüyor. Sosyal medyada #HorozumuKoruyalım etiketi trend oldu. Ne yapmalısınız?",
        vec![
            opt("Denizli Öğretmenevi'nde taraftarla açık buluşma düzenle", fx().fans(25).technical_team(5).finance(-5), &story3),
            opt("Teknik direktör ve başkanla birlikte basın toplantısı yap", fx().fans(15).sponsors(10).technical_team(10), &story3),
            opt("Takım kaptanıyla birlikte taraftara video mesaj yayınla", fx().fans(20).sponsors(15).technical_team(5), &story3),
            opt("Sportif konulara odaklanıp medya yorumlarını kısıtla", fx().fans(-20).sponsors(-10).technical_team(15), &story3),
        ],
    );

    node(
        "Pandemi sonrası ilk sezonda Denizli Atatürk Stadyumu'nda ortalama seyirci sayısı 6,000'e düştü (kapasite: 19,500). Taraftar desteği azalıyor. İlk hamleniz ne olacak?",
        vec![
            opt("Bayramyeri'nde taraftar forumu düzenle", fx().fans(20).finance(-10).technical_team(5), &story2),
            opt("Tüm tribünlerde %30 indirimli bilet kampanyası başlat", fx().fans(25).finance(-15).sponsors(5), &story2),
            opt("Futbolcuları şehir merkezinde imza gününe gönder", fx().fans(30).technical_team(-10).sponsors(15), &story2),
            opt("#BenimHorozum sosyal medya kampanyası başlat", fx().fans(15).sponsors(20).finance(-5), &story2),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_root() {
        let catalog = StoryCatalog::authored();
        for category in Category::ALL {
            let root = catalog.root(category).expect("missing root");
            assert!(!root.is_terminal(), "{} root must offer choices", category.name());
            assert_eq!(root.options.len(), 4);
        }
    }

    #[test]
    fn story_week_flag_lives_outside_the_trees() {
        assert_eq!(StoryCatalog::authored().story_week(), STORY_WEEK);
    }

    #[test]
    fn finance_root_branches_by_first_pick() {
        let catalog = StoryCatalog::authored();
        let root = catalog.root(Category::Finance).unwrap();

        let (effects, loan_branch) = root.select_option(0).unwrap();
        assert_eq!(effects.finance, 10);
        assert!(loan_branch.text.contains("Yapıkredi"));

        let (effects, sale_branch) = root.select_option(1).unwrap();
        assert_eq!(effects.finance, 30);
        assert_eq!(effects.technical_team, -20);
        assert!(sale_branch.text.contains("Trabzonspor"));
    }

    #[test]
    fn shared_successors_are_reference_counted() {
        let catalog = StoryCatalog::authored();
        let root = catalog.root(Category::Sponsors).unwrap();

        // Both mid-tree branches converge on the stadium naming node.
        let (_, a) = root.select_option(1).unwrap();
        let (_, b) = root.select_option(2).unwrap();
        let (_, next_a) = a.select_option(0).unwrap();
        let (_, next_b) = b.select_option(0).unwrap();
        assert!(Arc::ptr_eq(next_a, next_b));
    }

    fn authored_depth(category: Category) -> usize {
        let catalog = StoryCatalog::authored();
        let mut node = Arc::clone(catalog.root(category).unwrap());
        let mut depth = 0;
        while !node.is_terminal() {
            depth += 1;
            let (_, next) = node.select_option(0).unwrap();
            let next = Arc::clone(next);
            node = next;
        }
        depth
    }

    #[test]
    fn authored_depth_per_category() {
        // Three trees carry all five decision points; the fans tree
        // authors four and leans on fallback synthesis for the fifth.
        assert_eq!(authored_depth(Category::Finance), 5);
        assert_eq!(authored_depth(Category::TechnicalTeam), 5);
        assert_eq!(authored_depth(Category::Sponsors), 5);
        assert_eq!(authored_depth(Category::Fans), 4);
    }
}
